//! Error types for a run.
//!
//! `RunError` is fatal: the run stops and the CLI exits non-zero.
//! `AssetError` is recoverable: the asset is skipped and the run continues,
//! except `AssetError::Aborted`, which the mirror promotes to `RunError::Aborted`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL {input:?} has no host")]
    MissingHost { input: String },

    #[error("failed to access {url}: {source}")]
    PageRequest {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("failed to access {url}, status code: {code}")]
    PageStatus { url: String, code: u32 },

    #[error("failed to write {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("download cancelled by user")]
    Aborted,
}

impl RunError {
    /// HTTP status of a rejected page fetch, if that is why the run stopped.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            RunError::PageStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{0}")]
    Request(#[source] curl::Error),

    #[error("status code: {0}")]
    Status(u32),

    #[error("failed to write {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("download cancelled by user")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_status_message_carries_code() {
        let err = RunError::PageStatus {
            url: "http://example.com/".to_string(),
            code: 404,
        };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(
            err.to_string(),
            "failed to access http://example.com/, status code: 404"
        );
    }

    #[test]
    fn asset_status_message() {
        assert_eq!(AssetError::Status(500).to_string(), "status code: 500");
        assert_eq!(RunError::Aborted.status_code(), None);
    }
}
