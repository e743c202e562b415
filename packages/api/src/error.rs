use thiserror::Error;

/// Failure reading the testimonial list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure submitting a testimonial.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("submission rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl SubmitError {
    /// Server-supplied explanation, if the backend sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { detail, .. } => detail.as_deref(),
            SubmitError::Network(_) => None,
        }
    }
}
