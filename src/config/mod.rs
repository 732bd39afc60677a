pub mod cli;
pub mod toml_config;

use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::{
    core::ConfigProvider,
    domain::model::RoundSelection,
    utils::{
        error::Result,
        validation::{self, Validate},
    },
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_ARCHIVE_NAME: &str = "tables.zip";

pub fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Json]
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "liga-table")]
#[command(about = "Computes league standings from round result files")]
pub struct CliConfig {
    /// Directory holding one sub-directory per league
    #[arg(long, default_value = "./soccer-results")]
    pub results_root: String,

    /// League name or 1-based index; prompts interactively when omitted
    #[arg(long)]
    pub league: Option<String>,

    /// Only aggregate the first N rounds
    #[arg(long)]
    pub until_round: Option<usize>,

    /// Directory for rendered tables; nothing is written when omitted
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_enum, value_delimiter = ',', default_values_t = default_formats())]
    pub formats: Vec<OutputFormat>,

    /// Bundle all rendered files into one ZIP archive
    #[arg(long)]
    pub archive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn round_selection(&self) -> RoundSelection {
        RoundSelection::from_cutoff(self.until_round)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.formats
    }

    fn archive_name(&self) -> Option<&str> {
        self.archive.then_some(DEFAULT_ARCHIVE_NAME)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("results_root", &self.results_root)?;
        if let Some(output_path) = &self.output_path {
            validation::validate_path("output_path", output_path)?;
        }
        if let Some(league) = &self.league {
            validation::validate_non_empty_string("league", league)?;
        }
        if let Some(until_round) = self.until_round {
            validation::validate_positive_number("until_round", until_round, 1)?;
        }
        Ok(())
    }
}
