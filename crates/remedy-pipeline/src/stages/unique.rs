//! The latest submission of every case.

use remedy_core::{Table, date::parse_date_column, latest_per_key};

use crate::{
  Result,
  schema::{CASE_NUMBER, SUBMITTED},
};

/// One row per case number: the one with the latest submission date, ties
/// going to the earlier row. Rows come out newest first.
pub fn unique_complaints(enriched: &Table) -> Result<Table> {
  let submitted = parse_date_column(enriched, SUBMITTED)?;
  let unique = latest_per_key(enriched, CASE_NUMBER, &submitted)?;
  tracing::debug!(
    rows = enriched.len(),
    cases = unique.len(),
    "kept latest submission per case"
  );
  Ok(unique)
}
