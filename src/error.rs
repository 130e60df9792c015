use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve a single page. Recovered per URL by the auditor.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status
    #[error("HTTP status {status} for url {url}")]
    Status { status: StatusCode, url: String },

    /// No response within the configured timeout
    #[error("request to {url} timed out after {secs} seconds")]
    Timeout { url: String, secs: u64 },

    /// Anything else the transport reports (DNS, refused connection, bad URL...)
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Setup failures that stop a run before any URL is audited
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("failed to read URL list: {0}")]
    Input(#[source] std::io::Error),
}
