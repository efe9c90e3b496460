//! `remedy`: filter, enrich and expand BOP Remedy complaint filings.
//!
//! # Usage
//!
//! ```text
//! remedy NY
//! remedy all --config remedy.toml --output-dir results/data
//! remedy            # prompts for the jurisdiction
//! ```
//!
//! Configuration is read from `remedy.toml` (or `--config`) and may be
//! overridden with `REMEDY_`-prefixed environment variables, e.g.
//! `REMEDY_PIPELINE__DATA_DIR=/srv/bop`.

mod analysis;

use std::path::PathBuf;

use analysis::AnalysisConfig;
use anyhow::Context as _;
use clap::Parser;
use remedy_pipeline::{PipelineConfig, Selector};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Filter and expand BOP Remedy complaint filings")]
struct Cli {
  /// Jurisdiction (state) code such as NY, or ALL for every facility.
  /// Prompted for on stdin when omitted.
  selector: Option<String>,

  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "remedy.toml")]
  config: PathBuf,

  /// Write the CSV artifacts here instead of the configured directory.
  #[arg(long, value_name = "DIR")]
  output_dir: Option<PathBuf>,

  /// Do not run the companion analysis program afterwards.
  #[arg(long)]
  skip_analysis: bool,
}

// ─── Config file ──────────────────────────────────────────────────────────────

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
struct Settings {
  pipeline: PipelineConfig,
  analysis: AnalysisConfig,
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.as_path()).required(false))
    .add_source(
      config::Environment::with_prefix("REMEDY")
        .prefix_separator("_")
        .separator("__"),
    )
    .build()
    .context("failed to read config file")?;

  let mut settings: Settings = settings
    .try_deserialize()
    .context("failed to deserialise settings")?;
  if let Some(dir) = &cli.output_dir {
    settings.pipeline.output_dir = dir.clone();
  }
  Ok(settings)
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = load_settings(&cli)?;

  let raw = match &cli.selector {
    Some(s) => s.clone(),
    None => prompt_selector()?,
  };
  let selector: Selector = raw.parse()?;

  let report = remedy_pipeline::run(&settings.pipeline, &selector)
    .with_context(|| format!("pipeline failed for {selector}"))?;
  let rows: usize = report.artifacts.iter().map(|a| a.rows).sum();
  tracing::info!(
    artifacts = report.artifacts.len(),
    rows,
    "pipeline finished for {}",
    report.selector
  );

  run_analysis(&settings.analysis, cli.skip_analysis, &report.selector);
  Ok(())
}

/// Run the companion analysis unless disabled. Its failures are logged and
/// never change the exit status.
fn run_analysis(config: &AnalysisConfig, skip: bool, selector: &Selector) {
  if skip || !config.enabled {
    tracing::info!("companion analysis skipped");
  } else if let Err(e) = analysis::invoke(config, selector) {
    tracing::error!("companion analysis failed: {e}");
  }
}

/// Ask for the jurisdiction on stdin.
fn prompt_selector() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  print!("Enter the state code (e.g., 'NY', 'CA', 'DC', or 'ALL'): ");
  io::stdout().flush().ok();
  let mut line = String::new();
  io::stdin()
    .lock()
    .read_line(&mut line)
    .context("failed to read jurisdiction from stdin")?;
  Ok(line)
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  fn from_toml(toml: &str) -> Settings {
    config::Config::builder()
      .add_source(config::File::from_str(toml, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn empty_config_uses_defaults() {
    let s = from_toml("");
    assert_eq!(s.pipeline.data_dir, Path::new("../data"));
    assert_eq!(s.pipeline.output_dir, Path::new("../results/data"));
    assert_eq!(s.analysis.program, "Rscript");
    assert!(s.analysis.enabled);
  }

  #[test]
  fn sections_override_individual_fields() {
    let s = from_toml(
      r#"
      [pipeline]
      output_dir = "out"

      [pipeline.inputs]
      submissions = "filings-2024.csv"

      [analysis]
      enabled = false
      "#,
    );
    assert_eq!(s.pipeline.output_dir, Path::new("out"));
    assert_eq!(s.pipeline.data_dir, Path::new("../data"));
    assert_eq!(s.pipeline.inputs.submissions, Path::new("filings-2024.csv"));
    assert_eq!(
      s.pipeline.inputs.column_codes,
      Path::new("ColumnCodes.csv")
    );
    assert!(!s.analysis.enabled);
  }

  #[test]
  fn output_dir_flag_wins() {
    let cli = Cli::parse_from([
      "remedy",
      "ny",
      "--config",
      "/nonexistent/remedy.toml",
      "--output-dir",
      "/tmp/remedy-out",
    ]);
    let s = load_settings(&cli).unwrap();
    assert_eq!(s.pipeline.output_dir, Path::new("/tmp/remedy-out"));
    assert_eq!(cli.selector.as_deref(), Some("ny"));
  }

  #[cfg(unix)]
  fn shell(script: &str) -> AnalysisConfig {
    AnalysisConfig {
      enabled: true,
      program: "sh".into(),
      args:    vec!["-c".into(), script.into()],
    }
  }

  #[cfg(unix)]
  #[test]
  fn analysis_failures_are_swallowed() {
    run_analysis(&shell("exit 3"), false, &Selector::All);
    let missing = AnalysisConfig {
      program: "/nonexistent/analysis-program".into(),
      ..AnalysisConfig::default()
    };
    run_analysis(&missing, false, &Selector::All);
  }

  #[cfg(unix)]
  #[test]
  fn skip_flag_and_disabled_config_suppress_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("ran");
    let touch = shell(&format!("touch '{}'", marker.display()));

    run_analysis(&touch, true, &Selector::All);
    let disabled = AnalysisConfig {
      enabled: false,
      ..touch.clone()
    };
    run_analysis(&disabled, false, &Selector::All);
    assert!(!marker.exists());

    run_analysis(&touch, false, &Selector::All);
    assert!(marker.exists());
  }
}
