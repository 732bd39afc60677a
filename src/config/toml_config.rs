use crate::config::{default_formats, DEFAULT_ARCHIVE_NAME};
use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, RoundSelection};
use crate::utils::error::{LigaError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub load: LoadConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub results_root: String,
    pub league: Option<String>,
    pub until_round: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
    pub archive: Option<ArchiveConfig>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            formats: default_formats(),
            archive: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // literal pattern, always compiles
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LigaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LigaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("source.results_root", &self.source.results_root)?;

        if let Some(league) = &self.source.league {
            validation::validate_non_empty_string("source.league", league)?;
        }

        if let Some(until_round) = self.source.until_round {
            validation::validate_positive_number("source.until_round", until_round, 1)?;
        }

        if let Some(output_path) = &self.load.output_path {
            validation::validate_path("load.output_path", output_path)?;
        }

        if let Some(name) = self.archive_name() {
            validation::validate_archive_name("load.archive.filename", name)?;
        }

        Ok(())
    }

    pub fn results_root(&self) -> &str {
        &self.source.results_root
    }

    pub fn league(&self) -> Result<&str> {
        validation::validate_required_field("source.league", &self.source.league).map(String::as_str)
    }

    pub fn round_selection(&self) -> RoundSelection {
        RoundSelection::from_cutoff(self.source.until_round)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().is_some_and(|l| l.verbose)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().is_some_and(|l| l.json)
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> Option<&str> {
        self.load.output_path.as_deref()
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.load.formats
    }

    fn archive_name(&self) -> Option<&str> {
        self.load
            .archive
            .as_ref()
            .filter(|archive| archive.enabled)
            .map(|archive| archive.filename.as_deref().unwrap_or(DEFAULT_ARCHIVE_NAME))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
