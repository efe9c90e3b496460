//! A small row-major table with named columns.
//!
//! Cells are `Option<String>`: `None` is a missing value (an empty CSV field),
//! which is distinct from any present string. Column names are unique within
//! a table.

use std::collections::HashMap;

use crate::{Error, Lookup, Result};

/// A single table cell. `None` means the value is missing.
pub type Cell = Option<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
  columns: Vec<String>,
  index:   HashMap<String, usize>,
  rows:    Vec<Vec<Cell>>,
}

/// A borrowed view of one row, able to resolve cells by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
  table: &'a Table,
  cells: &'a [Cell],
}

impl<'a> Row<'a> {
  /// The value in `column`, or `None` if it is missing or the column does
  /// not exist.
  pub fn get(&self, column: &str) -> Option<&'a str> {
    self
      .table
      .index
      .get(column)
      .and_then(|&i| self.at(i))
  }

  pub fn at(&self, index: usize) -> Option<&'a str> {
    self.cells.get(index).and_then(|c| c.as_deref())
  }
}

impl Table {
  /// Create an empty table with the given column names.
  pub fn new<I, S>(columns: I) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
    let index = build_index(&columns)?;
    Ok(Self {
      columns,
      index,
      rows: Vec::new(),
    })
  }

  pub fn columns(&self) -> &[String] { &self.columns }

  pub fn rows(&self) -> &[Vec<Cell>] { &self.rows }

  pub fn len(&self) -> usize { self.rows.len() }

  pub fn is_empty(&self) -> bool { self.rows.is_empty() }

  pub fn has_column(&self, name: &str) -> bool { self.index.contains_key(name) }

  pub fn column_index(&self, name: &str) -> Result<usize> {
    self
      .index
      .get(name)
      .copied()
      .ok_or_else(|| Error::MissingColumn(name.to_owned()))
  }

  /// Fail with [`Error::MissingColumn`] naming the first absent column.
  pub fn require_columns(&self, names: &[&str]) -> Result<()> {
    names.iter().try_for_each(|n| self.column_index(n).map(|_| ()))
  }

  /// Append a row. Its arity must match the number of columns.
  pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
    if row.len() != self.columns.len() {
      return Err(Error::RowArity {
        row:      self.rows.len() + 1,
        expected: self.columns.len(),
        found:    row.len(),
      });
    }
    self.rows.push(row);
    Ok(())
  }

  pub fn iter_rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
    self.rows.iter().map(move |cells| Row { table: self, cells })
  }

  /// Iterate the values of one column, top to bottom.
  pub fn column(
    &self,
    name: &str,
  ) -> Result<impl Iterator<Item = Option<&str>> + '_> {
    let i = self.column_index(name)?;
    Ok(self.rows.iter().map(move |r| r[i].as_deref()))
  }

  /// Append a new column holding one value per existing row.
  pub fn add_column(
    &mut self,
    name: impl Into<String>,
    values: Vec<Cell>,
  ) -> Result<()> {
    let name = name.into();
    if self.index.contains_key(&name) {
      return Err(Error::DuplicateColumn(name));
    }
    if values.len() != self.rows.len() {
      return Err(Error::LengthMismatch {
        expected: self.rows.len(),
        found:    values.len(),
      });
    }
    self.index.insert(name.clone(), self.columns.len());
    self.columns.push(name);
    for (row, value) in self.rows.iter_mut().zip(values) {
      row.push(value);
    }
    Ok(())
  }

  /// Overwrite the values of an existing column.
  pub fn replace_column(&mut self, name: &str, values: Vec<Cell>) -> Result<()> {
    let i = self.column_index(name)?;
    if values.len() != self.rows.len() {
      return Err(Error::LengthMismatch {
        expected: self.rows.len(),
        found:    values.len(),
      });
    }
    for (row, value) in self.rows.iter_mut().zip(values) {
      row[i] = value;
    }
    Ok(())
  }

  /// Replace every value of `name` with `f(value)`.
  pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
  where
    F: FnMut(Option<&str>) -> Cell,
  {
    let i = self.column_index(name)?;
    for row in &mut self.rows {
      row[i] = f(row[i].as_deref());
    }
    Ok(())
  }

  /// Replace every value of `name` with its translation, keeping values the
  /// lookup has no entry for.
  pub fn translate_column(&mut self, name: &str, lookup: &Lookup) -> Result<()> {
    self.map_column(name, |v| lookup.translate(v))
  }

  /// A new table holding the rows for which `keep` returns true, in order.
  pub fn filter_rows<F>(&self, mut keep: F) -> Table
  where
    F: FnMut(Row<'_>) -> bool,
  {
    let rows = self
      .iter_rows()
      .filter(|r| keep(*r))
      .map(|r| r.cells.to_vec())
      .collect();
    self.with_rows(rows)
  }

  /// A new table holding the rows at `indices`, in the order given.
  pub fn select_rows(&self, indices: &[usize]) -> Table {
    let rows = indices.iter().map(|&i| self.rows[i].clone()).collect();
    self.with_rows(rows)
  }

  /// Rename columns for which `rename` returns a new name. Fails if the
  /// result would contain the same name twice.
  pub fn rename_columns<F>(&mut self, mut rename: F) -> Result<()>
  where
    F: FnMut(&str) -> Option<String>,
  {
    let renamed: Vec<String> = self
      .columns
      .iter()
      .map(|c| rename(c).unwrap_or_else(|| c.clone()))
      .collect();
    self.index = build_index(&renamed)?;
    self.columns = renamed;
    Ok(())
  }

  fn with_rows(&self, rows: Vec<Vec<Cell>>) -> Table {
    Table {
      columns: self.columns.clone(),
      index: self.index.clone(),
      rows,
    }
  }
}

fn build_index(columns: &[String]) -> Result<HashMap<String, usize>> {
  let mut index = HashMap::with_capacity(columns.len());
  for (i, c) in columns.iter().enumerate() {
    if index.insert(c.clone(), i).is_some() {
      return Err(Error::DuplicateColumn(c.clone()));
    }
  }
  Ok(index)
}
