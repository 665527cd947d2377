//! # qBittorrent WebUI Types
//!
//! This crate defines the error type, the data model and the [`TorrentDaemon`] trait
//! shared by qBittorrent WebUI clients.

use thiserror::Error;

mod models;
mod tag;

pub use models::{FileInfo, TorrentInfo, TorrentState};
pub use tag::{JobTag, TAG_PREFIX};

/// Error type for daemon operations.
#[derive(Error, Debug)]
pub enum DaemonError {
    /// The client could not be created: malformed endpoint, transport setup
    /// failure or failed bootstrap authorization.
    #[error("failed to construct client: {0}")]
    Construction(String),

    /// The session could not be (re-)established.
    #[error("unauthorized qBittorrent WebUI at {endpoint}")]
    Unauthorized {
        /// Credential-free endpoint the client talks to.
        endpoint: String,
    },

    /// Network-related errors (connection failures, timeouts, TLS, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// The daemon answered, but not with its documented success response.
    #[error("{context} (HTTP {status})")]
    Protocol {
        /// What was attempted, including the caller's input.
        context: String,
        /// HTTP status returned by the daemon.
        status: u16,
    },

    /// A job tag did not resolve to exactly one torrent.
    #[error("there should be exactly one torrent with tag \"{tag}\", found {matches}")]
    Correlation {
        /// The remote tag that was looked up.
        tag: String,
        /// Number of torrents carrying the tag.
        matches: usize,
    },

    /// The response body did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl DaemonError {
    /// Whether the failure is an infrastructure fault worth retrying later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Unauthorized { .. })
    }

    /// Whether the failure means the job tag does not map to exactly one torrent.
    ///
    /// This does not tell apart a job that never started from one that was removed.
    pub fn is_correlation(&self) -> bool {
        matches!(self, Self::Correlation { .. })
    }
}

/// TorrentDaemon defines the operations a hosting application delegates to the daemon.
///
/// Every job is addressed through its [`JobTag`], never through the remote hash.
#[allow(async_fn_in_trait)]
pub trait TorrentDaemon {
    /// Submit a link (magnet or .torrent URL) to be downloaded into `save_path`,
    /// tagged for `job`.
    async fn submit(&self, link: &str, save_path: &str, job: &JobTag)
    -> Result<(), DaemonError>;
    /// Get the torrent tagged for `job`.
    async fn get_info(&self, job: &JobTag) -> Result<TorrentInfo, DaemonError>;
    /// List the files of the torrent tagged for `job`.
    async fn get_files(&self, job: &JobTag) -> Result<Vec<FileInfo>, DaemonError>;
    /// Stop tracking the torrent tagged for `job`. Downloaded data is kept.
    async fn delete(&self, job: &JobTag) -> Result<(), DaemonError>;
}

#[cfg(test)]
mod tests {
    use super::DaemonError;

    #[test]
    fn retryable_categories() {
        assert!(DaemonError::Network("refused".into()).is_retryable());
        assert!(
            DaemonError::Unauthorized {
                endpoint: "http://localhost:8080/".into()
            }
            .is_retryable()
        );
        assert!(
            !DaemonError::Protocol {
                context: "failed to add torrent".into(),
                status: 200
            }
            .is_retryable()
        );
        assert!(!DaemonError::Decode("eof".into()).is_retryable());
    }

    #[test]
    fn correlation_is_not_retryable() {
        let err = DaemonError::Correlation {
            tag: "alist-42".into(),
            matches: 0,
        };
        assert!(err.is_correlation());
        assert!(!err.is_retryable());
        assert_eq!(
            err.to_string(),
            "there should be exactly one torrent with tag \"alist-42\", found 0"
        );
    }

    #[test]
    fn protocol_message_carries_context() {
        let err = DaemonError::Protocol {
            context: "failed to add torrent magnet:?xt=urn:btih:abc".into(),
            status: 403,
        };
        assert_eq!(
            err.to_string(),
            "failed to add torrent magnet:?xt=urn:btih:abc (HTTP 403)"
        );
    }
}
