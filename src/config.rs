use std::{path::PathBuf, str::FromStr};

use crate::{errors::AppError, games::scramble::SubmissionPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::EnvError(format!(
                "OUTPUT_FORMAT must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub start_words_path: Option<PathBuf>,
    pub dictionary_path: Option<PathBuf>,
    pub policy: SubmissionPolicy,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_words_path: None,
            dictionary_path: None,
            policy: SubmissionPolicy::default(),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let allow_base_word = match lookup("ALLOW_BASE_WORD") {
            Some(v) => parse_var("ALLOW_BASE_WORD", &v)?,
            None => defaults.policy.allow_base_word,
        };
        let min_word_length = match lookup("MIN_WORD_LENGTH") {
            Some(v) => parse_var("MIN_WORD_LENGTH", &v)?,
            None => defaults.policy.min_word_length,
        };
        let output = match lookup("OUTPUT_FORMAT") {
            Some(v) => v.parse()?,
            None => defaults.output,
        };

        Ok(Self {
            start_words_path: lookup("START_WORDS_PATH").map(PathBuf::from),
            dictionary_path: lookup("DICTIONARY_PATH").map(PathBuf::from),
            policy: SubmissionPolicy {
                allow_base_word,
                min_word_length,
            },
            output,
        })
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::EnvError(format!("{key} has invalid value '{value}'")))
}
