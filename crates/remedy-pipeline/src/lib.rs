//! The BOP Remedy enrichment pipeline.
//!
//! Filters complaint filings to one jurisdiction, attaches per-case
//! aggregates, translates coded values into text, and derives a
//! latest-record-per-case view. [`run`] executes every stage in order and
//! writes one CSV artifact per stage.

pub mod codes;
pub mod config;
pub mod error;
pub mod run;
pub mod schema;
pub mod selector;
pub mod stages;

pub use codes::CodeTables;
pub use config::{InputFiles, PipelineConfig};
pub use error::{Error, Result};
pub use run::{
  Artifact, Inputs, RunReport, WrittenArtifact, run, run_with_inputs,
};
pub use selector::Selector;
