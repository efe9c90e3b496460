//! Per-case aggregates joined back onto every submission.

use std::collections::HashMap;

use chrono::NaiveDate;
use remedy_core::{
  Cell, Table,
  date::{days_between, format_date, parse_date_column},
  group_count, group_max, group_min,
};

use crate::{Result, schema::*};

/// Statistics shared by every submission of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseAggregate {
  /// Total submissions for the case.
  pub subcount:            u64,
  pub rejcount:            u64,
  /// Closed-denied plus closed-other submissions.
  pub cldclocount:         u64,
  /// Closed-granted plus accepted submissions.
  pub clgacccount:         u64,
  pub earliest_submission: Option<NaiveDate>,
  pub latest_status:       Option<NaiveDate>,
}

impl CaseAggregate {
  /// Days from the first submission to the latest status. Negative values
  /// are kept; they flag inconsistent source data.
  pub fn days_between(&self) -> Option<i64> {
    Some(days_between(self.earliest_submission?, self.latest_status?))
  }
}

/// Compute the aggregate of every case number in `submissions`.
///
/// Fails if a submission or status date is present but unparseable.
pub fn case_aggregates(
  submissions: &Table,
) -> Result<HashMap<String, CaseAggregate>> {
  let status = submissions.column_index(STATUS)?;
  let with_status = |codes: &'static [&'static str]| {
    group_count(submissions, CASE_NUMBER, move |r| {
      r.at(status).is_some_and(|s| codes.iter().any(|c| *c == s))
    })
  };

  let subcounts = group_count(submissions, CASE_NUMBER, |_| true)?;
  let rejected = with_status(REJECTED)?;
  let denied_or_other = with_status(CLOSED_DENIED_OR_OTHER)?;
  let granted_or_accepted = with_status(CLOSED_GRANTED_OR_ACCEPTED)?;

  let submitted = parse_date_column(submissions, SUBMITTED)?;
  let status_dates = parse_date_column(submissions, STATUS_DATE)?;
  let earliest = group_min(submissions, CASE_NUMBER, &submitted)?;
  let latest = group_max(submissions, CASE_NUMBER, &status_dates)?;

  let count = |counts: &HashMap<String, u64>, case: &str| {
    counts.get(case).copied().unwrap_or(0)
  };

  Ok(
    subcounts
      .iter()
      .map(|(case, &subcount)| {
        let aggregate = CaseAggregate {
          subcount,
          rejcount: count(&rejected, case),
          cldclocount: count(&denied_or_other, case),
          clgacccount: count(&granted_or_accepted, case),
          earliest_submission: earliest.get(case).copied(),
          latest_status: latest.get(case).copied(),
        };
        (case.clone(), aggregate)
      })
      .collect(),
  )
}

/// Attach the case aggregates to every row of `submissions`.
///
/// The submission and status date columns are rewritten as `YYYY-MM-DD`.
/// Rows without a case number get missing aggregates.
pub fn enrich_submissions(submissions: &Table) -> Result<Table> {
  let aggregates = case_aggregates(submissions)?;

  let mut enriched = submissions.clone();
  for column in [SUBMITTED, STATUS_DATE] {
    let normalised = parse_date_column(submissions, column)?
      .into_iter()
      .map(|d| d.map(format_date))
      .collect();
    enriched.replace_column(column, normalised)?;
  }

  let per_row: Vec<Option<&CaseAggregate>> = submissions
    .column(CASE_NUMBER)?
    .map(|case| case.and_then(|c| aggregates.get(c)))
    .collect();
  let derive = |f: fn(&CaseAggregate) -> Cell| -> Vec<Cell> {
    per_row.iter().map(|a| a.and_then(f)).collect()
  };

  enriched.add_column(SUBCOUNT, derive(|a| Some(a.subcount.to_string())))?;
  enriched.add_column(REJCOUNT, derive(|a| Some(a.rejcount.to_string())))?;
  enriched
    .add_column(CLDCLOCOUNT, derive(|a| Some(a.cldclocount.to_string())))?;
  enriched
    .add_column(CLGACCCOUNT, derive(|a| Some(a.clgacccount.to_string())))?;
  enriched.add_column(
    EARLIEST_SUBMITTED,
    derive(|a| a.earliest_submission.map(format_date)),
  )?;
  enriched.add_column(
    LATEST_STATUS_DATE,
    derive(|a| a.latest_status.map(format_date)),
  )?;
  enriched.add_column(
    DAYS_BETWEEN,
    derive(|a| a.days_between().map(|d| d.to_string())),
  )?;

  tracing::debug!(
    rows = enriched.len(),
    cases = aggregates.len(),
    "computed case aggregates"
  );
  Ok(enriched)
}
