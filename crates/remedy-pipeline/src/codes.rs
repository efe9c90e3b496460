//! The code → text lookup tables used by the expansion stage.

use std::path::Path;

use remedy_core::Lookup;

use crate::{Error, PipelineConfig, Result, schema};

/// Every translation table, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct CodeTables {
  pub complaint_subtype: Lookup,
  pub facility:          Lookup,
  pub status:            Lookup,
  pub org_level:         Lookup,
  pub status_reason:     Lookup,
  pub primary_subject:   Lookup,
  /// Raw column identifier → human-readable column name.
  pub column_names:      Lookup,
}

impl CodeTables {
  pub fn load(config: &PipelineConfig) -> Result<Self> {
    let files = &config.inputs;
    let load = |input: &'static str,
                file: &Path,
                code: &str,
                text: &str|
     -> Result<Lookup> {
      let table = remedy_csv::read_table(&config.input_path(file))?;
      let lookup = Lookup::from_table(&table, code, text)
        .map_err(|source| Error::Input { input, source })?;
      if lookup.is_empty() {
        tracing::warn!(input, "lookup table is empty; codes stay untranslated");
      } else {
        tracing::debug!(input, entries = lookup.len(), "loaded lookup");
      }
      Ok(lookup)
    };

    Ok(Self {
      complaint_subtype: load(
        "complaint subtype codes",
        &files.complaint_codes,
        "Code",
        "Text",
      )?,
      facility:          load(
        "facility codes",
        &files.facility_codes,
        schema::FACILITY_CODE,
        schema::FACILITY_NAME,
      )?,
      status:            load("status codes", &files.status_codes, "Code", "Text")?,
      org_level:         load(
        "org level codes",
        &files.org_level_codes,
        "Code",
        "Text",
      )?,
      status_reason:     load(
        "status reason codes",
        &files.status_reason_codes,
        "Reason Code",
        "Text",
      )?,
      primary_subject:   load(
        "primary subject codes",
        &files.primary_subject_codes,
        "Primary Subject Code",
        "Primary Subject Code Translation",
      )?,
      column_names:      load("column codes", &files.column_codes, "Code", "Text")?,
    })
  }
}
