use std::{
  fs::{self, File},
  io,
  path::{Path, PathBuf},
};

use remedy_core::Table;

use crate::{Error, Result};

/// Write `table` to `path`, replacing any existing file.
///
/// The data is written to `<path>.tmp` first and renamed over `path` once
/// complete.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
  let tmp = tmp_path(path);
  let write_err = |source| Error::Write {
    path: path.to_owned(),
    source,
  };

  let written = File::create(&tmp).and_then(|f| write_table_to(table, f));
  if let Err(e) = written.and_then(|()| fs::rename(&tmp, path)) {
    let _ = fs::remove_file(&tmp);
    return Err(write_err(e));
  }

  tracing::debug!(path = %path.display(), rows = table.len(), "wrote table");
  Ok(())
}

/// Serialise `table` as CSV into `writer`; missing values become empty
/// fields.
pub fn write_table_to<W: io::Write>(table: &Table, writer: W) -> io::Result<()> {
  let mut out = csv::Writer::from_writer(writer);
  out.write_record(table.columns())?;
  for row in table.rows() {
    out.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))?;
  }
  out.flush()
}

fn tmp_path(path: &Path) -> PathBuf {
  let name = path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| "table.csv".to_owned());
  path.with_file_name(format!("{name}.tmp"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::read_table;

  fn sample() -> Table {
    let mut t = Table::new(["Case Number", "Note"]).unwrap();
    t.push_row(vec![Some("C1".into()), Some("late, but filed".into())])
      .unwrap();
    t.push_row(vec![Some("C2".into()), None]).unwrap();
    t
  }

  #[test]
  fn writes_header_and_quotes_when_needed() {
    let mut buf = Vec::new();
    write_table_to(&sample(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "Case Number,Note\nC1,\"late, but filed\"\nC2,\n");
  }

  #[test]
  fn file_round_trip_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("NY_Submissions.csv");

    write_table(&sample(), &path).unwrap();

    assert_eq!(read_table(&path).unwrap(), sample());
    assert!(!dir.path().join("NY_Submissions.csv.tmp").exists());
  }

  #[test]
  fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale\n").unwrap();

    write_table(&sample(), &path).unwrap();

    assert_eq!(read_table(&path).unwrap().len(), 2);
  }

  #[test]
  fn missing_directory_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("out.csv");
    let err = write_table(&sample(), &path).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
  }
}
