use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream call timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response decoding failed: {0}")]
    Decode(String),

    #[error("failed to read staged upload: {0}")]
    Io(#[from] std::io::Error),
}
