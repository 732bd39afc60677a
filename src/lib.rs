pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{LocalRoundSource, LocalStorage};
pub use config::toml_config::TomlConfig;
pub use crate::core::{etl::TableEngine, pipeline::LeaguePipeline};
pub use domain::model::{LeagueTable, OutputFormat, RoundSelection, TableRequest};
pub use utils::error::{LigaError, Result};
