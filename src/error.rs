use thiserror::Error;

/// Why a read against a locator did not produce a payload.
///
/// Both variants surface to consumers as [`Status::Failed`](crate::resource::Status::Failed).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Malformed body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport(Box::new(error))
    }
}
