use thiserror::Error;

/// Failures surfaced by the API client. No retry is attempted; the caller
/// decides whether to report and continue or abort.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or a non-2xx status from the service.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered 2xx but the body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}
