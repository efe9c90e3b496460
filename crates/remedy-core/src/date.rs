//! Calendar-date parsing for the date columns of the filing data.
//!
//! Only the date part matters to the pipeline; a time of day, when present,
//! is discarded.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{Error, Result, Table};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y%m%d"];

const DATETIME_FORMATS: &[&str] = &[
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%d %H:%M:%S%.f",
  "%m/%d/%Y %H:%M:%S",
  "%m/%d/%Y %H:%M",
];

/// Parse a date in any of the accepted layouts. Surrounding whitespace is
/// ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
  let s = s.trim();
  DATE_FORMATS
    .iter()
    .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
    .or_else(|| {
      DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .map(|dt| dt.date())
    })
}

/// ISO 8601 calendar date, `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

/// Parse every value of `column`. Missing values parse to `None`; any
/// present value that is not a date fails with [`Error::InvalidDate`].
pub fn parse_date_column(
  table: &Table,
  column: &str,
) -> Result<Vec<Option<NaiveDate>>> {
  table
    .column(column)?
    .enumerate()
    .map(|(i, value)| match value {
      None => Ok(None),
      Some(v) => parse_date(v).map(Some).ok_or_else(|| Error::InvalidDate {
        column: column.to_owned(),
        row:    i + 1,
        value:  v.to_owned(),
      }),
    })
    .collect()
}

/// Whole days from `start` to `end`; negative when `end` is earlier.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
  (end - start).num_days()
}
