use std::{fs::File, io, path::Path};

use remedy_core::Table;

use crate::{Error, Result};

/// Read the CSV file at `path` into a table.
pub fn read_table(path: &Path) -> Result<Table> {
  let file = File::open(path).map_err(|source| Error::Open {
    path: path.to_owned(),
    source,
  })?;
  read_table_from(file, path)
}

/// Read CSV from any reader. `origin` names the source in error messages.
///
/// Fields are trimmed, the first record is the header, and every record must
/// have as many fields as the header.
pub fn read_table_from<R: io::Read>(reader: R, origin: &Path) -> Result<Table> {
  let malformed = |source| Error::Malformed {
    path: origin.to_owned(),
    source,
  };
  let table_err = |source| Error::Table {
    path: origin.to_owned(),
    source,
  };

  let mut reader = csv::ReaderBuilder::new()
    .has_headers(true)
    .trim(csv::Trim::All)
    .from_reader(reader);

  let headers = reader.headers().map_err(malformed)?.clone();
  let mut table = Table::new(headers.iter()).map_err(table_err)?;

  for record in reader.records() {
    let record = record.map_err(malformed)?;
    let row = record
      .iter()
      .map(|field| (!field.is_empty()).then(|| field.to_owned()))
      .collect();
    table.push_row(row).map_err(table_err)?;
  }

  tracing::debug!(
    path = %origin.display(),
    rows = table.len(),
    columns = table.columns().len(),
    "read table"
  );
  Ok(table)
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn origin() -> PathBuf { PathBuf::from("inline.csv") }

  #[test]
  fn empty_fields_are_missing() {
    let csv = "CASENBR,sdtdue\nC1,\nC2,2023-01-05\n";
    let t = read_table_from(csv.as_bytes(), &origin()).unwrap();
    assert_eq!(t.columns(), ["CASENBR", "sdtdue"]);
    assert_eq!(
      t.column("sdtdue").unwrap().collect::<Vec<_>>(),
      [None, Some("2023-01-05")]
    );
  }

  #[test]
  fn headers_and_fields_are_trimmed() {
    let csv = " Code , Text\n REJ ,Rejected \n";
    let t = read_table_from(csv.as_bytes(), &origin()).unwrap();
    assert_eq!(t.columns(), ["Code", "Text"]);
    assert_eq!(t.rows()[0], [Some("REJ".to_string()), Some("Rejected".into())]);
  }

  #[test]
  fn ragged_rows_are_malformed() {
    let csv = "a,b\n1,2\n3\n";
    let err = read_table_from(csv.as_bytes(), &origin()).unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }));
  }

  #[test]
  fn duplicate_headers_are_rejected() {
    let csv = "a,a\n1,2\n";
    let err = read_table_from(csv.as_bytes(), &origin()).unwrap_err();
    assert!(matches!(err, Error::Table { .. }));
  }

  #[test]
  fn missing_file_names_the_path() {
    let err = read_table(Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert!(err.to_string().contains("/definitely/not/here.csv"));
  }
}
