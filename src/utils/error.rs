use thiserror::Error;

#[derive(Error, Debug)]
pub enum LigaError {
    #[error("Malformed match line '{line}': {reason}")]
    MalformedMatchLine { line: String, reason: String },

    #[error("Total '{field}' for team '{team}' exceeds the supported range")]
    StatisticsOverflow { team: String, field: String },

    #[error("Round {requested} is out of range (1 to {total} available)")]
    RoundOutOfRange { requested: usize, total: usize },

    #[error("Unknown league or path '{league}' under '{root}'")]
    UnknownLeague { league: String, root: String },

    #[error("Invalid selection '{input}': {reason}")]
    InvalidSelection { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field '{field}'")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Selection,
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LigaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LigaError::MalformedMatchLine { .. } | LigaError::StatisticsOverflow { .. } => {
                ErrorCategory::Input
            }
            LigaError::RoundOutOfRange { .. }
            | LigaError::UnknownLeague { .. }
            | LigaError::InvalidSelection { .. } => ErrorCategory::Selection,
            LigaError::ConfigValidationError { .. }
            | LigaError::InvalidConfigValueError { .. }
            | LigaError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LigaError::IoError(_) => ErrorCategory::Io,
            LigaError::CsvError(_) | LigaError::SerializationError(_) | LigaError::ZipError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // the caller can simply ask again
            ErrorCategory::Selection => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Whether an interactive session may re-prompt instead of exiting.
    pub fn is_recoverable(&self) -> bool {
        self.severity() <= ErrorSeverity::Medium
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LigaError::MalformedMatchLine { .. } => {
                "Fix the round file so every line reads '<team> <goals> : <goals> <team>'"
            }
            LigaError::StatisticsOverflow { .. } => {
                "Check the round files for implausible goal counts"
            }
            LigaError::RoundOutOfRange { .. } => {
                "Choose a round between 1 and the number of round files, or leave it empty for all rounds"
            }
            LigaError::UnknownLeague { .. } => {
                "Check the results root and pick one of the listed leagues"
            }
            LigaError::InvalidSelection { .. } => "Enter a number or leave the input empty",
            LigaError::IoError(_) => "Check that the paths exist and are readable/writable",
            LigaError::CsvError(_) | LigaError::SerializationError(_) | LigaError::ZipError(_) => {
                "Check the output path and available disk space"
            }
            LigaError::ConfigValidationError { .. }
            | LigaError::InvalidConfigValueError { .. }
            | LigaError::MissingConfigError { .. } => "Review the configuration file or CLI flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LigaError::MalformedMatchLine { line, .. } => {
                format!("Could not read match result: \"{}\"", line)
            }
            LigaError::StatisticsOverflow { team, .. } => {
                format!("Statistics for '{}' are too large to add up", team)
            }
            LigaError::RoundOutOfRange { requested, total } => {
                format!("Round {} does not exist; the league has {} rounds", requested, total)
            }
            LigaError::UnknownLeague { league, .. } => format!("League '{}' was not found", league),
            LigaError::InvalidSelection { input, .. } => format!("'{}' is not a valid choice", input),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LigaError>;
