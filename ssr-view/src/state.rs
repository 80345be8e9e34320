//! Per-screen view state.
//!
//! [`ResortListState`] backs the resort list: a search query and at most one
//! expanded card. [`FavoritesScreenState`] backs the favorites screen: the
//! add-favorites modal and independently expandable favorite cards.

use crate::filter::{filter_by_name, filter_favorites, search_excluding_favorites};
use ssr_resort::{Resort, ResortId};
use ssr_store::{FavoritesStore, KeyValueStorage};
use std::collections::BTreeSet;

/// Search and expansion state of the resort list.
///
/// The auto-expand rule fires when the number of name matches changes and
/// lands on exactly one: that resort becomes expanded. Editing the search
/// text always clears the expansion first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResortListState {
    search_query: String,
    expanded: Option<ResortId>,
    match_count: Option<usize>,
}

impl ResortListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn expanded(&self) -> Option<ResortId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: ResortId) -> bool {
        self.expanded == Some(id)
    }

    /// Resorts matching the current search, in input order.
    pub fn visible<'a>(&self, resorts: &'a [Resort]) -> Vec<&'a Resort> {
        filter_by_name(resorts, &self.search_query)
    }

    /// Replace the search text, clear the expansion and re-apply auto-expand.
    pub fn set_search_query(&mut self, text: &str, resorts: &[Resort]) {
        self.search_query = text.to_string();
        self.expanded = None;
        self.sync(resorts);
    }

    /// Re-evaluate auto-expand against `resorts`, e.g. after a fetch settles.
    pub fn sync(&mut self, resorts: &[Resort]) {
        let matches = self.visible(resorts);
        if self.match_count == Some(matches.len()) {
            return;
        }
        self.match_count = Some(matches.len());
        if let [only] = matches.as_slice() {
            self.expanded = Some(only.id);
        }
    }

    /// Tap on a card: expand it, or collapse it if it is already expanded.
    pub fn toggle(&mut self, id: ResortId) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }
}

/// The "Add Favorites" modal: visibility and its own search text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddFavoritesModal {
    pub visible: bool,
    pub search_query: String,
}

/// State of the favorites screen.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FavoritesScreenState {
    modal: AddFavoritesModal,
    expanded: BTreeSet<ResortId>,
}

impl FavoritesScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when there is nothing to list and the screen shows its empty prompt.
    pub fn shows_empty_state<S: KeyValueStorage>(&self, store: &FavoritesStore<S>) -> bool {
        store.is_empty()
    }

    /// Favorite resorts, in resort list order.
    pub fn favorite_resorts<'a, S: KeyValueStorage>(
        &self,
        resorts: &'a [Resort],
        store: &FavoritesStore<S>,
    ) -> Vec<&'a Resort> {
        filter_favorites(resorts, store.favorites())
    }

    /// Modal search results: name matches that are not favorites yet.
    pub fn search_results<'a, S: KeyValueStorage>(
        &self,
        resorts: &'a [Resort],
        store: &FavoritesStore<S>,
    ) -> Vec<&'a Resort> {
        search_excluding_favorites(resorts, store.favorites(), &self.modal.search_query)
    }

    pub fn modal(&self) -> &AddFavoritesModal {
        &self.modal
    }

    pub fn open_add_modal(&mut self) {
        self.modal.visible = true;
    }

    pub fn close_add_modal(&mut self) {
        self.modal.visible = false;
    }

    pub fn set_search_query(&mut self, text: &str) {
        self.modal.search_query = text.to_string();
    }

    /// Pick a search result: add it, close the modal and clear its search.
    pub fn pick<S: KeyValueStorage>(&mut self, id: ResortId, store: &mut FavoritesStore<S>) {
        store.add_favorite(id);
        self.modal.visible = false;
        self.modal.search_query.clear();
    }

    /// Remove a favorite card.
    pub fn remove<S: KeyValueStorage>(&mut self, id: ResortId, store: &mut FavoritesStore<S>) {
        store.remove_favorite(id);
        self.expanded.remove(&id);
    }

    /// Favorite cards expand independently of each other.
    pub fn toggle_card(&mut self, id: ResortId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: ResortId) -> bool {
        self.expanded.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssr_store::MemoryStorage;

    fn resorts() -> Vec<Resort> {
        vec![Resort::new(1, "Alta"), Resort::new(2, "Snowbird")]
    }

    #[test]
    fn singleton_match_auto_expands() {
        let resorts = resorts();
        let mut state = ResortListState::new();
        state.sync(&resorts);
        assert_eq!(state.expanded(), None);

        state.set_search_query("alt", &resorts);
        assert_eq!(state.expanded(), Some(1));
        assert!(state.is_expanded(1));
    }

    #[test]
    fn editing_search_clears_until_rule_refires() {
        let resorts = resorts();
        let mut state = ResortListState::new();
        state.set_search_query("alt", &resorts);
        assert_eq!(state.expanded(), Some(1));

        // still one match, so the rule does not fire again
        state.set_search_query("alta", &resorts);
        assert_eq!(state.expanded(), None);
        state.set_search_query("alt", &resorts);
        assert_eq!(state.expanded(), None);

        state.set_search_query("", &resorts);
        assert_eq!(state.expanded(), None);
        state.set_search_query("bird", &resorts);
        assert_eq!(state.expanded(), Some(2));
    }

    #[test]
    fn zero_matches_do_not_expand() {
        let resorts = resorts();
        let mut state = ResortListState::new();
        state.set_search_query("vail", &resorts);
        assert_eq!(state.expanded(), None);
        assert!(state.visible(&resorts).is_empty());
    }

    #[test]
    fn single_resort_list_expands_on_first_sync() {
        let resorts = vec![Resort::new(5, "Brighton")];
        let mut state = ResortListState::new();
        state.sync(&resorts);
        assert_eq!(state.expanded(), Some(5));
    }

    #[test]
    fn toggle_keeps_at_most_one_expanded() {
        let mut state = ResortListState::new();
        state.toggle(1);
        assert_eq!(state.expanded(), Some(1));
        state.toggle(2);
        assert_eq!(state.expanded(), Some(2));
        assert!(!state.is_expanded(1));
        state.toggle(2);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn favorites_screen_empty_state() {
        let store = FavoritesStore::open(MemoryStorage::default());
        let screen = FavoritesScreenState::new();
        assert!(screen.shows_empty_state(&store));
        assert!(screen.favorite_resorts(&resorts(), &store).is_empty());
    }

    #[test]
    fn picking_a_result_adds_and_resets_modal() {
        let resorts = resorts();
        let mut store = FavoritesStore::open(MemoryStorage::default());
        let mut screen = FavoritesScreenState::new();

        screen.open_add_modal();
        screen.set_search_query("snow");
        let results = screen.search_results(&resorts, &store);
        assert_eq!(results.len(), 1);
        let id = results[0].id;

        screen.pick(id, &mut store);
        assert!(store.is_favorite(2));
        assert!(!screen.modal().visible);
        assert_eq!(screen.modal().search_query, "");
        assert!(!screen.shows_empty_state(&store));

        let favorites = screen.favorite_resorts(&resorts, &store);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "Snowbird");
        // favorites drop out of the modal results
        let results = screen.search_results(&resorts, &store);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn favorite_cards_expand_independently() {
        let mut store = FavoritesStore::open(MemoryStorage::default());
        let mut screen = FavoritesScreenState::new();
        store.add_favorite(1);
        store.add_favorite(2);

        screen.toggle_card(1);
        screen.toggle_card(2);
        assert!(screen.is_expanded(1));
        assert!(screen.is_expanded(2));

        screen.toggle_card(1);
        assert!(!screen.is_expanded(1));

        screen.remove(2, &mut store);
        assert!(!store.is_favorite(2));
        assert!(!screen.is_expanded(2));
    }
}
