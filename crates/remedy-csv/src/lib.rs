//! CSV codec for [`remedy_core::Table`].
//!
//! Headers become column names and empty fields become missing values; on
//! the way out missing values are written as empty fields. Writes go to a
//! sibling temporary file that is renamed into place, so a reader never
//! observes a half-written file.

pub mod error;
mod read;
mod write;

pub use error::{Error, Result};
pub use read::{read_table, read_table_from};
pub use write::{write_table, write_table_to};
