//! Loading the inputs and running every stage in order.

use std::{
  fmt, fs,
  path::{Path, PathBuf},
};

use remedy_core::{Table, date::parse_date_column};

use crate::{
  CodeTables, Error, PipelineConfig, Result, Selector,
  schema::{
    FACILITY_CODE, FACILITY_STATE, STATUS_DATE, SUBMITTED,
    required_submission_columns,
  },
  stages::{
    enrich_submissions, expand_submissions, filter_submissions,
    unique_complaints,
  },
};

// ─── Artifacts ───────────────────────────────────────────────────────────────

/// The CSV files a run produces, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
  Submissions,
  SubmissionsEnriched,
  SubmissionsEnrichedExpanded,
  UniqueComplaintsEnriched,
  UniqueComplaintsEnrichedExpanded,
}

impl Artifact {
  pub const ALL: [Artifact; 5] = [
    Self::Submissions,
    Self::SubmissionsEnriched,
    Self::SubmissionsEnrichedExpanded,
    Self::UniqueComplaintsEnriched,
    Self::UniqueComplaintsEnrichedExpanded,
  ];

  fn stem(self) -> &'static str {
    match self {
      Self::Submissions => "Submissions",
      Self::SubmissionsEnriched => "SubmissionsEnriched",
      Self::SubmissionsEnrichedExpanded => "SubmissionsEnrichedExpanded",
      Self::UniqueComplaintsEnriched => "UniqueComplaintsEnriched",
      Self::UniqueComplaintsEnrichedExpanded => {
        "UniqueComplaintsEnrichedExpanded"
      }
    }
  }

  /// `{SEL}_{stem}.csv`, e.g. `NY_SubmissionsEnriched.csv`.
  pub fn file_name(self, selector: &Selector) -> String {
    format!("{selector}_{}.csv", self.stem())
  }
}

impl fmt::Display for Artifact {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Submissions => "filtered submissions",
      Self::SubmissionsEnriched => "enriched submissions",
      Self::SubmissionsEnrichedExpanded => "expanded submissions",
      Self::UniqueComplaintsEnriched => "unique complaints",
      Self::UniqueComplaintsEnrichedExpanded => "unique expanded complaints",
    })
  }
}

#[derive(Debug, Clone)]
pub struct WrittenArtifact {
  pub artifact: Artifact,
  pub path:     PathBuf,
  pub rows:     usize,
}

/// What a run wrote.
#[derive(Debug, Clone)]
pub struct RunReport {
  pub selector:  Selector,
  pub artifacts: Vec<WrittenArtifact>,
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Every input table, loaded and validated before anything is written.
#[derive(Debug, Clone)]
pub struct Inputs {
  pub facilities:  Table,
  pub submissions: Table,
  pub codes:       CodeTables,
}

impl Inputs {
  pub fn load(config: &PipelineConfig) -> Result<Self> {
    let files = &config.inputs;

    let facilities = remedy_csv::read_table(&config.input_path(&files.facilities))?;
    facilities
      .require_columns(&[FACILITY_CODE, FACILITY_STATE])
      .map_err(|source| Error::Input {
        input: "facility registry",
        source,
      })?;

    let submissions =
      remedy_csv::read_table(&config.input_path(&files.submissions))?;
    let invalid = |source| Error::Input {
      input: "submissions",
      source,
    };
    submissions
      .require_columns(&required_submission_columns())
      .map_err(invalid)?;
    for column in [SUBMITTED, STATUS_DATE] {
      parse_date_column(&submissions, column).map_err(invalid)?;
    }

    let codes = CodeTables::load(config)?;

    tracing::info!(
      facilities = facilities.len(),
      submissions = submissions.len(),
      "loaded inputs"
    );
    Ok(Self {
      facilities,
      submissions,
      codes,
    })
  }
}

// ─── Run ─────────────────────────────────────────────────────────────────────

/// Load every input, then filter, enrich, expand, deduplicate and expand the
/// deduplicated view, writing each result into `config.output_dir`.
///
/// Input and stage errors abort before any file is written.
pub fn run(config: &PipelineConfig, selector: &Selector) -> Result<RunReport> {
  let inputs = Inputs::load(config)?;
  run_with_inputs(&inputs, &config.output_dir, selector)
}

/// Run every stage over already-loaded inputs.
///
/// All five tables are computed before the first one is written, so a stage
/// failure leaves the previous run's artifacts untouched.
pub fn run_with_inputs(
  inputs: &Inputs,
  output_dir: &Path,
  selector: &Selector,
) -> Result<RunReport> {
  let filtered =
    filter_submissions(selector, &inputs.facilities, &inputs.submissions)?;
  let enriched = enrich_submissions(&filtered)?;
  let expanded = expand_submissions(&enriched, &inputs.codes)?;
  let unique = unique_complaints(&enriched)?;
  let unique_expanded = expand_submissions(&unique, &inputs.codes)?;

  fs::create_dir_all(output_dir).map_err(|source| Error::OutputDir {
    path: output_dir.to_owned(),
    source,
  })?;

  let mut report = RunReport {
    selector:  selector.clone(),
    artifacts: Vec::with_capacity(Artifact::ALL.len()),
  };
  for (artifact, table) in Artifact::ALL.into_iter().zip([
    &filtered,
    &enriched,
    &expanded,
    &unique,
    &unique_expanded,
  ]) {
    let path = output_dir.join(artifact.file_name(selector));
    remedy_csv::write_table(table, &path)?;
    tracing::info!("{selector} {artifact} saved to {}", path.display());
    report.artifacts.push(WrittenArtifact {
      artifact,
      path,
      rows: table.len(),
    });
  }

  Ok(report)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn file_names_carry_the_selector() {
    let ny = Selector::Jurisdiction("NY".into());
    assert_eq!(Artifact::Submissions.file_name(&ny), "NY_Submissions.csv");
    assert_eq!(
      Artifact::UniqueComplaintsEnrichedExpanded.file_name(&Selector::All),
      "ALL_UniqueComplaintsEnrichedExpanded.csv"
    );
  }
}
