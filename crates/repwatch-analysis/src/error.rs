use thiserror::Error;

/// Rejections raised while validating a batch.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("all {submitted} submitted mentions have empty text")]
    EmptyBatch { submitted: usize },
}

/// Failures of an external text generator. Never surfaced to batch callers; the
/// drafter logs them and falls back to the template reply.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("text generator is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("response contained no generated text")]
    EmptyResponse,

    #[error("generation timed out after {0:?}")]
    Timeout(std::time::Duration),
}
