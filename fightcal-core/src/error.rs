//! Error types for fightcal.

use thiserror::Error;

/// Errors that can occur while fetching events or building feeds.
#[derive(Error, Debug)]
pub enum FightCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider '{0}' not found in PATH")]
    ProviderNotInstalled(String),

    #[error("Provider request timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("Could not read events file {path}: {reason}")]
    EventsFile { path: String, reason: String },

    #[error("No events returned by {0}")]
    NoEvents(String),

    #[error("Event {url} has an invalid date '{value}' (expected epoch seconds)")]
    InvalidEventDate { url: String, value: String },

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for fightcal operations.
pub type FightCalResult<T> = Result<T, FightCalError>;
