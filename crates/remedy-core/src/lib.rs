//! In-memory tables and the table primitives the Remedy pipeline is built
//! from.
//!
//! This crate is deliberately free of I/O. Every operation works on a
//! [`Table`] held in memory, so each primitive can be tested against small
//! literal tables.

pub mod aggregate;
pub mod date;
pub mod dedup;
pub mod error;
pub mod table;
pub mod translate;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use aggregate::{group_count, group_max, group_min};
pub use dedup::latest_per_key;
pub use error::{Error, Result};
pub use table::{Cell, Row, Table};
pub use translate::{Lookup, left_translate};
