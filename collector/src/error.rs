use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success envelope.
    #[error("api rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}
