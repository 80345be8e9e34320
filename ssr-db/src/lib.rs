//! In-memory SQLite database for ski resort rows.
//!
//! This crate is the local side of the resort data accessor: rows arrive
//! either from the bundled CSV fixture (or a CSV snapshot written by the
//! CLI) or from a remote fetch, and are read back either in load order or
//! ordered by display name.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability on a single thread
//! - In-memory SQLite via `rusqlite`
//! - Typed query methods returning [`ssr_resort::Resort`] rows
//!
//! # Usage
//!
//! ```rust
//! use ssr_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_resorts_csv(ssr_resort::resort::CSV_OBJECT).unwrap();
//!
//! let resorts = db.query_resorts().unwrap();
//! assert!(!resorts.is_empty());
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the resort table.
///
/// This struct is cheaply cloneable (via `Rc`); clones share one connection.
///
/// # Example
///
/// ```rust
/// use ssr_db::Database;
/// use ssr_resort::Resort;
///
/// let db = Database::new().unwrap();
/// db.insert_resorts(&[Resort::new(1, "Alta")]).unwrap();
/// let resorts = db.query_resorts().unwrap();
/// assert_eq!(resorts.len(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` / `insert_*`
    /// methods to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssr_resort::Resort;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.insert_resorts(&[Resort::new(1, "Alta")]).unwrap();
        let resorts = db2.query_resorts().unwrap();
        assert_eq!(resorts.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let resorts = db.query_resorts().unwrap();
        assert!(resorts.is_empty(), "New database should have no resorts");
    }
}
