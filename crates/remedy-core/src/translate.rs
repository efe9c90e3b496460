//! Code-to-text lookups and the left translation primitive.
//!
//! Translation is a partial mapping: a present value with an entry in the
//! lookup is replaced by its text, any other present value is kept verbatim,
//! and a missing value stays missing.

use std::collections::HashMap;

use crate::{Cell, Result, Table};

/// A code → text mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
  entries: HashMap<String, String>,
}

impl Lookup {
  /// Build a lookup from two columns of `table`.
  ///
  /// Rows with a missing code or missing text contribute nothing. When a code
  /// appears more than once the last row wins.
  pub fn from_table(
    table: &Table,
    code_column: &str,
    text_column: &str,
  ) -> Result<Self> {
    let code = table.column_index(code_column)?;
    let text = table.column_index(text_column)?;
    Ok(
      table
        .iter_rows()
        .filter_map(|r| Some((r.at(code)?, r.at(text)?)))
        .collect(),
    )
  }

  pub fn get(&self, code: &str) -> Option<&str> {
    self.entries.get(code).map(String::as_str)
  }

  pub fn translate(&self, value: Option<&str>) -> Cell {
    value.map(|v| self.get(v).unwrap_or(v).to_owned())
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<K, V> FromIterator<(K, V)> for Lookup
where
  K: Into<String>,
  V: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      entries: iter
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }
}

/// Translate a whole column, preserving unmapped and missing values.
pub fn left_translate<'a, I>(column: I, lookup: &Lookup) -> Vec<Cell>
where
  I: IntoIterator<Item = Option<&'a str>>,
{
  column.into_iter().map(|v| lookup.translate(v)).collect()
}
