//! Keeping the latest row per key.

use std::{cmp::Ordering, collections::HashSet};

use crate::{Error, Result, Table};

/// One row per distinct value of `key`: the row with the greatest
/// `order_by` value.
///
/// Rows are stably sorted by `order_by` descending, with missing values
/// last, and the first row seen for each key is kept; ties therefore go to
/// the row that came first in `table`. The result stays in that sorted
/// order. Rows with a missing key are treated as one group.
pub fn latest_per_key<T: Ord>(
  table: &Table,
  key: &str,
  order_by: &[Option<T>],
) -> Result<Table> {
  if order_by.len() != table.len() {
    return Err(Error::LengthMismatch {
      expected: table.len(),
      found:    order_by.len(),
    });
  }
  let key = table.column_index(key)?;

  let mut order: Vec<usize> = (0..table.len()).collect();
  order.sort_by(|&a, &b| descending_missing_last(&order_by[a], &order_by[b]));

  let rows = table.rows();
  let mut seen = HashSet::new();
  let keep: Vec<usize> = order
    .into_iter()
    .filter(|&i| seen.insert(rows[i][key].as_deref()))
    .collect();

  Ok(table.select_rows(&keep))
}

fn descending_missing_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => b.cmp(a),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::table;

  fn ids(t: &Table) -> Vec<Option<&str>> { t.column("id").unwrap().collect() }

  #[test]
  fn keeps_greatest_per_key() {
    let t = table(
      &["k", "id"],
      &[&["a", "1"], &["a", "2"], &["b", "3"], &["a", "4"]],
    );
    let out = latest_per_key(&t, "k", &[Some(1), Some(9), Some(5), Some(3)])
      .unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(ids(&out), [Some("2"), Some("3")]);
  }

  #[test]
  fn ties_go_to_the_earlier_row() {
    let t = table(&["k", "id"], &[&["a", "1"], &["a", "2"]]);
    let out = latest_per_key(&t, "k", &[Some(7), Some(7)]).unwrap();
    assert_eq!(ids(&out), [Some("1")]);
  }

  #[test]
  fn missing_order_values_sort_last() {
    let t = table(&["k", "id"], &[&["a", "1"], &["a", "2"], &["b", "3"]]);
    let out = latest_per_key(&t, "k", &[None, Some(1), None]).unwrap();
    assert_eq!(ids(&out), [Some("2"), Some("3")]);
  }

  #[test]
  fn missing_keys_form_one_group() {
    let t = table(&["k", "id"], &[&["", "1"], &["", "2"]]);
    let out = latest_per_key(&t, "k", &[Some(1), Some(2)]).unwrap();
    assert_eq!(ids(&out), [Some("2")]);
  }

  #[test]
  fn order_values_must_line_up() {
    let t = table(&["k", "id"], &[&["a", "1"]]);
    assert!(latest_per_key::<i32>(&t, "k", &[]).is_err());
  }
}
