use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtlError {
    #[error("Failed to retrieve API key: {0}")]
    SecretUnavailable(String),

    #[error("News API Fetch Error: API request failed: {0}")]
    FetchFailed(String),

    #[error("{0} is empty")]
    EmptyInput(String),

    #[error("Invalid CSV format: {0}")]
    MalformedInput(String),

    #[error("Invalid trigger event: {0}")]
    InvalidEvent(String),

    #[error("Failed to read s3://{bucket}/{key}: {reason}")]
    ObjectReadError {
        bucket: String,
        key: String,
        reason: String,
    },

    #[error("S3 Upload Failed: s3://{bucket}/{key}: {reason}")]
    ObjectWriteError {
        bucket: String,
        key: String,
        reason: String,
    },

    /// Never fatal: the failure path logs it and keeps the original error.
    #[error("Failed to publish alert: {0}")]
    NotifierError(String),

    #[error("Failed to serialize output: {0}")]
    Serialization(String),
}
