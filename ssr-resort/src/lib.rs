//! Core types and remote client for ski resort snow data.
//!
//! A [`resort::Resort`] is one row of the remote resort table. The column
//! names of that table double as the CSV header of the bundled fixture and
//! of snapshots written by the CLI.

#[cfg(feature = "api")]
pub mod api;
pub mod resort;

pub use resort::{Resort, ResortId};
