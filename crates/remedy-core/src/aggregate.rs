//! Group-by aggregations keyed on one column.
//!
//! Rows whose key is missing never form a group.

use std::collections::HashMap;

use crate::{Error, Result, Row, Table};

/// Count the rows of each key value for which `predicate` holds.
///
/// Keys with no matching rows are absent from the result; callers that need
/// a zero default read it with `unwrap_or(0)`.
pub fn group_count<F>(
  table: &Table,
  key: &str,
  mut predicate: F,
) -> Result<HashMap<String, u64>>
where
  F: FnMut(Row<'_>) -> bool,
{
  let key = table.column_index(key)?;
  let mut counts = HashMap::new();
  for row in table.iter_rows() {
    let Some(k) = row.at(key) else { continue };
    if predicate(row) {
      *counts.entry(k.to_owned()).or_insert(0) += 1;
    }
  }
  Ok(counts)
}

/// The smallest present value per key. `values` holds one entry per row.
pub fn group_min<T: Ord + Clone>(
  table: &Table,
  key: &str,
  values: &[Option<T>],
) -> Result<HashMap<String, T>> {
  group_extreme(table, key, values, |candidate, current| candidate < current)
}

/// The largest present value per key. `values` holds one entry per row.
pub fn group_max<T: Ord + Clone>(
  table: &Table,
  key: &str,
  values: &[Option<T>],
) -> Result<HashMap<String, T>> {
  group_extreme(table, key, values, |candidate, current| candidate > current)
}

fn group_extreme<T, F>(
  table: &Table,
  key: &str,
  values: &[Option<T>],
  replaces: F,
) -> Result<HashMap<String, T>>
where
  T: Clone,
  F: Fn(&T, &T) -> bool,
{
  if values.len() != table.len() {
    return Err(Error::LengthMismatch {
      expected: table.len(),
      found:    values.len(),
    });
  }
  let key = table.column_index(key)?;
  let mut out: HashMap<String, T> = HashMap::new();
  for (row, value) in table.iter_rows().zip(values) {
    let (Some(k), Some(v)) = (row.at(key), value) else {
      continue;
    };
    match out.get_mut(k) {
      Some(current) => {
        if replaces(v, current) {
          *current = v.clone();
        }
      }
      None => {
        out.insert(k.to_owned(), v.clone());
      }
    }
  }
  Ok(out)
}
