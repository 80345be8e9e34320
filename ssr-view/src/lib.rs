//! Derived view state for the resort list and favorites screens.
//!
//! Everything here is computed from the resort list and the favorites store
//! and never persisted. The functions in [`filter`] and [`snow`] are pure;
//! the reference date for day labels is always passed in explicitly.

pub mod filter;
pub mod query;
pub mod snow;
pub mod state;
