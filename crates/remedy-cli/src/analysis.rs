//! The companion statistical-analysis program run after the pipeline.
//!
//! It is an opaque collaborator: it receives the selector as its last
//! argument and its exit status is reported but never propagated.

use std::{
  io,
  process::{Command, ExitStatus},
};

use remedy_pipeline::Selector;
use serde::Deserialize;
use thiserror::Error;

/// `[analysis]` section of `remedy.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
  pub enabled: bool,
  pub program: String,
  /// Arguments placed before the selector.
  pub args:    Vec<String>,
}

impl Default for AnalysisConfig {
  fn default() -> Self {
    Self {
      enabled: true,
      program: "Rscript".into(),
      args:    vec!["StateAnalysis.R".into()],
    }
  }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
  #[error("failed to launch {program}: {source}")]
  Launch {
    program: String,
    #[source]
    source:  io::Error,
  },

  #[error("{program} exited with {status}")]
  Failed { program: String, status: ExitStatus },
}

/// Run the analysis program once for `selector` and wait for it.
pub fn invoke(
  config: &AnalysisConfig,
  selector: &Selector,
) -> Result<(), AnalysisError> {
  tracing::info!("Running {} for: {selector}", config.program);
  let status = Command::new(&config.program)
    .args(&config.args)
    .arg(selector.to_string())
    .status()
    .map_err(|source| AnalysisError::Launch {
      program: config.program.clone(),
      source,
    })?;

  if !status.success() {
    return Err(AnalysisError::Failed {
      program: config.program.clone(),
      status,
    });
  }
  tracing::info!("{} completed for: {selector}", config.program);
  Ok(())
}
