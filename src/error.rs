//! Library error type

use thiserror::Error;

/// Errors produced by the diarios library
#[derive(Debug, Error)]
pub enum Error {
    /// A post date that none of the accepted date formats could parse
    #[error("invalid date: {input:?}")]
    InvalidDate { input: String },

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown contact platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
