use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::game::explorer::{LimitsError, DEFAULT_MAX_WORD_SIZE, DEFAULT_MIN_WORD_SIZE};
use crate::game::WordLimits;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("OUTPUT_FORMAT must be 'text' or 'json', got '{0}'")]
    InvalidOutputFormat(String),
    #[error(transparent)]
    Limits(#[from] LimitsError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub limits: WordLimits,
    pub show_scores: bool,
    pub wordlist_path: PathBuf,
    pub board_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub prune_prefixes: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limits: WordLimits::default(),
            show_scores: false,
            wordlist_path: PathBuf::from("enable1.txt"),
            board_path: None,
            output_format: OutputFormat::Text,
            prune_prefixes: false,
        }
    }
}

// A set flag counts as on unless it is spelled as an explicit "off".
fn flag_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

fn parse_size(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

impl SearchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Applies overrides from `lookup` on top of the defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let min = match lookup("MIN_WORD_SIZE") {
            Some(value) => parse_size("MIN_WORD_SIZE", &value)?,
            None => DEFAULT_MIN_WORD_SIZE,
        };
        let max = match lookup("MAX_WORD_SIZE") {
            Some(value) => parse_size("MAX_WORD_SIZE", &value)?,
            None => DEFAULT_MAX_WORD_SIZE,
        };
        config.limits = WordLimits::new(min, max)?;

        if let Some(score) = lookup("SCORE") {
            config.show_scores = flag_enabled(&score);
        }

        if let Some(path) = lookup("WORDLIST") {
            config.wordlist_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("BOARD_FILE") {
            if !path.trim().is_empty() {
                config.board_path = Some(PathBuf::from(path));
            }
        }

        if let Some(format) = lookup("OUTPUT_FORMAT") {
            config.output_format = format.parse()?;
        }

        if let Some(prune) = lookup("PRUNE_PREFIXES") {
            config.prune_prefixes = flag_enabled(&prune);
        }

        Ok(config)
    }
}
