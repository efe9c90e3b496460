//! Literal-table helpers for tests in this and downstream crates.

use crate::Table;

/// Build a table from string literals; `""` becomes a missing value.
pub fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
  let mut t = Table::new(columns.iter().copied()).unwrap();
  for r in rows {
    t.push_row(
      r.iter()
        .map(|v| (!v.is_empty()).then(|| v.to_string()))
        .collect(),
    )
    .unwrap();
  }
  t
}

/// The values of one column, top to bottom.
pub fn values<'a>(t: &'a Table, column: &str) -> Vec<Option<&'a str>> {
  t.column(column).unwrap().collect()
}
