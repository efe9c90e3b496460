//! The pipeline stages. Each one is a pure table → table function; writing
//! the result to disk is left to [`crate::run`].

pub mod enrich;
pub mod expand;
pub mod filter;
pub mod unique;

pub use enrich::{CaseAggregate, case_aggregates, enrich_submissions};
pub use expand::expand_submissions;
pub use filter::{filter_submissions, jurisdiction_facilities};
pub use unique::unique_complaints;
