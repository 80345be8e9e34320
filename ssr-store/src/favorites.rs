use crate::storage::KeyValueStorage;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use ssr_resort::ResortId;

/// Storage key holding the favorites snapshot.
pub const FAVORITES_KEY: &str = "favorites-storage";

const SNAPSHOT_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    favorites: Vec<ResortId>,
}

/// `{"state":{"favorites":[...]},"version":0}`
#[derive(Debug, Serialize, Deserialize)]
struct PersistedFavorites {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Envelope(PersistedFavorites),
    Bare(Vec<ResortId>),
}

impl Snapshot {
    fn into_ids(self) -> Vec<ResortId> {
        match self {
            Snapshot::Envelope(envelope) => envelope.state.favorites,
            Snapshot::Bare(ids) => ids,
        }
    }
}

/// A change made before the snapshot was loaded, replayed onto it by `rehydrate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingOp {
    Add(ResortId),
    Remove(ResortId),
}

/// Whether the store has loaded its persisted snapshot yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Ready,
}

/// The set of favorited resort ids, written through to storage on every change.
///
/// Ids keep their insertion order and never repeat.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
    favorites: Vec<ResortId>,
    pending: Vec<PendingOp>,
    state: StoreState,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// An empty store that has not read its snapshot yet.
    pub fn new(storage: S) -> Self {
        FavoritesStore {
            storage,
            favorites: Vec::new(),
            pending: Vec::new(),
            state: StoreState::Uninitialized,
        }
    }

    /// Create a store and rehydrate it from `storage` immediately.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.rehydrate();
        store
    }

    /// Load the persisted snapshot and move to [`StoreState::Ready`].
    ///
    /// Runs once; later calls do nothing. Adds and removes made before
    /// rehydration are replayed, in order, onto the stored ids. A missing or
    /// unreadable snapshot leaves only the replayed changes.
    pub fn rehydrate(&mut self) {
        if self.state == StoreState::Ready {
            return;
        }
        self.favorites.clear();
        for id in self.read_snapshot() {
            insert_unique(&mut self.favorites, id);
        }
        let pending = std::mem::take(&mut self.pending);
        for op in &pending {
            match *op {
                PendingOp::Add(id) => insert_unique(&mut self.favorites, id),
                PendingOp::Remove(id) => self.favorites.retain(|&fav| fav != id),
            }
        }
        self.state = StoreState::Ready;
        info!(
            "Rehydrated {} favorites ({} pending changes)",
            self.favorites.len(),
            pending.len()
        );
        if !pending.is_empty() {
            self.persist();
        }
    }

    fn read_snapshot(&self) -> Vec<ResortId> {
        let raw = match self.storage.read(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites, starting empty: {:#}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => snapshot.into_ids(),
            Err(e) => {
                warn!("Unreadable favorites snapshot, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == StoreState::Ready
    }

    /// Mark `id` as a favorite. Adding an existing favorite changes nothing
    /// but still rewrites the snapshot.
    ///
    /// Before rehydration the change is kept in memory only and replayed
    /// onto the stored ids once [`rehydrate`](Self::rehydrate) runs.
    pub fn add_favorite(&mut self, id: ResortId) {
        insert_unique(&mut self.favorites, id);
        self.record(PendingOp::Add(id));
    }

    /// Remove `id` from the favorites. Removing an unknown id is a no-op on the set.
    pub fn remove_favorite(&mut self, id: ResortId) {
        self.favorites.retain(|&fav| fav != id);
        self.record(PendingOp::Remove(id));
    }

    fn record(&mut self, op: PendingOp) {
        match self.state {
            StoreState::Uninitialized => self.pending.push(op),
            StoreState::Ready => self.persist(),
        }
    }

    pub fn is_favorite(&self, id: ResortId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorite ids in the order they were added.
    pub fn favorites(&self) -> &[ResortId] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Best effort: failures are logged and dropped. Nothing is written
    /// before rehydration so the stored snapshot is never clobbered.
    fn persist(&mut self) {
        if self.state != StoreState::Ready {
            return;
        }
        let snapshot = PersistedFavorites {
            state: PersistedState {
                favorites: self.favorites.clone(),
            },
            version: SNAPSHOT_VERSION,
        };
        let encoded = match serde_json::to_string(&snapshot) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode favorites: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.write(FAVORITES_KEY, &encoded) {
            warn!("Failed to persist favorites: {:#}", e);
        }
    }
}

fn insert_unique(favorites: &mut Vec<ResortId>, id: ResortId) {
    if !favorites.contains(&id) {
        favorites.push(id);
    }
}
