use crate::analyze::client::ClientError;

/// Error taxonomy for a docread invocation.
///
/// Everything is fatal for the current run: configuration and input problems
/// surface before any network activity, and any failure of the remote analyze
/// operation (file I/O included) is wrapped exactly once, preserving the
/// original cause. No variant triggers a local retry.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Document analysis failed: {0}")]
    AnalysisFailed(#[from] ClientError),
}
