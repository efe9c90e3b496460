//! Restricting submissions to one jurisdiction's facilities.

use std::collections::HashSet;

use remedy_core::Table;

use crate::{
  Result, Selector,
  schema::{FACILITY_CODE, FACILITY_OF_OCCURRENCE, FACILITY_STATE},
};

/// Codes of every facility whose state matches `jurisdiction`, compared
/// ASCII case-insensitively.
pub fn jurisdiction_facilities(
  facilities: &Table,
  jurisdiction: &str,
) -> Result<HashSet<String>> {
  let code = facilities.column_index(FACILITY_CODE)?;
  let state = facilities.column_index(FACILITY_STATE)?;
  Ok(
    facilities
      .iter_rows()
      .filter(|r| {
        r.at(state)
          .is_some_and(|s| s.eq_ignore_ascii_case(jurisdiction))
      })
      .filter_map(|r| r.at(code).map(str::to_owned))
      .collect(),
  )
}

/// Submissions whose facility of occurrence belongs to the selected
/// jurisdiction. [`Selector::All`] keeps every row.
pub fn filter_submissions(
  selector: &Selector,
  facilities: &Table,
  submissions: &Table,
) -> Result<Table> {
  let Selector::Jurisdiction(jurisdiction) = selector else {
    return Ok(submissions.clone());
  };

  let codes = jurisdiction_facilities(facilities, jurisdiction)?;
  if codes.is_empty() {
    tracing::warn!("no facilities are registered to {jurisdiction}");
  }

  let occurrence = submissions.column_index(FACILITY_OF_OCCURRENCE)?;
  let filtered = submissions
    .filter_rows(|r| r.at(occurrence).is_some_and(|c| codes.contains(c)));
  tracing::debug!(
    facilities = codes.len(),
    kept = filtered.len(),
    of = submissions.len(),
    "filtered submissions to {jurisdiction}"
  );
  Ok(filtered)
}
