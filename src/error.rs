use std::fmt;

use thiserror::Error;

/// Why a single status check failed.
#[derive(Debug, Error)]
pub enum PollError {
    /// Endpoint unreachable, non-2xx reply, or the body could not be read.
    #[error("status request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Body was read but is not a status report.
    #[error("status response from {url} is not a valid report: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Parse,
}

impl PollError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PollError::Transport { .. } => FailureKind::Transport,
            PollError::Parse { .. } => FailureKind::Parse,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            PollError::Transport { url, .. } | PollError::Parse { url, .. } => url,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Parse => write!(f, "parse"),
        }
    }
}

/// Rejected poller configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("unsupported endpoint scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
    #[error("invalid variant: '{0}'. Expected 'basic' or 'extended'.")]
    UnknownVariant(String),
    #[error("invalid failure policy: '{0}'. Expected 'log' or 'propagate'.")]
    UnknownFailurePolicy(String),
    #[error("poll interval must be greater than zero")]
    ZeroInterval,
}
