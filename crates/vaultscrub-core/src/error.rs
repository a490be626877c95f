use thiserror::Error;

/// Failure to turn an override source into a usable `RuleSet`.
///
/// Callers are expected to recover from this by falling back to the base rule set.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Invalid value pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The document handed to the engine could not be read as JSON. Fatal to a run.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
