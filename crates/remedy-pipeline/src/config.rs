//! Pipeline configuration, deserialised from the `[pipeline]` section of
//! `remedy.toml`.
//!
//! Every field has a default, so an absent or partial config file still
//! yields a usable configuration. Input file names are resolved against
//! `data_dir` unless they are absolute.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
  pub data_dir:   PathBuf,
  /// Directory the five artifacts are written to; created when absent.
  pub output_dir: PathBuf,
  pub inputs:     InputFiles,
}

/// File names of every input table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputFiles {
  pub facilities:            PathBuf,
  pub submissions:           PathBuf,
  pub complaint_codes:       PathBuf,
  pub facility_codes:        PathBuf,
  pub status_codes:          PathBuf,
  pub org_level_codes:       PathBuf,
  pub status_reason_codes:   PathBuf,
  pub primary_subject_codes: PathBuf,
  pub column_codes:          PathBuf,
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      data_dir:   PathBuf::from("../data"),
      output_dir: PathBuf::from("../results/data"),
      inputs:     InputFiles::default(),
    }
  }
}

impl Default for InputFiles {
  fn default() -> Self {
    Self {
      facilities:            "CDFC_FacilityCodes.csv".into(),
      submissions:           "ComplaintFilings.csv".into(),
      complaint_codes:       "cdsub1cb_ConcatSubjectCodes.csv".into(),
      facility_codes:        "CDFC_FacilityCodes.csv".into(),
      status_codes:          "CDSTATUS_CaseStatusCodes.csv".into(),
      org_level_codes:       "ITERLVL_OrgLevelCodes.csv".into(),
      status_reason_codes:   "STATRSN_StatusReasonCodes.csv".into(),
      primary_subject_codes: "CDSUB1PR _PrimarySubjectCodes.csv".into(),
      column_codes:          "ColumnCodes.csv".into(),
    }
  }
}

impl PipelineConfig {
  /// Resolve an input file name against `data_dir`.
  pub fn input_path(&self, file: &Path) -> PathBuf { self.data_dir.join(file) }
}
