//! Favorites store with write-through persistence.
//!
//! [`FavoritesStore`] owns the set of favorited resort ids and writes the
//! full set to an injected [`KeyValueStorage`] after every mutation. On
//! startup it rehydrates from the same key; a missing or unreadable
//! snapshot falls back to an empty set.
//!
//! ```rust
//! use ssr_store::{FavoritesStore, MemoryStorage};
//!
//! let mut store = FavoritesStore::open(MemoryStorage::default());
//! store.add_favorite(7);
//! assert!(store.is_favorite(7));
//! store.remove_favorite(7);
//! assert!(!store.is_favorite(7));
//! ```

pub mod favorites;
pub mod storage;

pub use favorites::{FavoritesStore, StoreState, FAVORITES_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
