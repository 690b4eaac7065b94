use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetcher error
///
/// Both variants are handled the same way by the list controller: logged, then dropped.
#[derive(Error, Debug)]
pub enum FetcherError {
    /// The response could not be mapped to repository items
    #[error("Parsing error: {0}")]
    Parse(String),
    /// The request failed or the API answered with an error status
    #[error("Remote error: {0}")]
    Remote(String),
}

impl From<reqwest::Error> for FetcherError {
    fn from(error: reqwest::Error) -> Self {
        match error.is_decode() {
            true => FetcherError::Parse(error.to_string()),
            false => FetcherError::Remote(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetcherError {
    fn from(error: serde_json::Error) -> Self {
        FetcherError::Parse(error.to_string())
    }
}
