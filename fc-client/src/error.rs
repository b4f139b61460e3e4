use crate::route::Provider;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("unsupported model: {0}")]
    UnsupportedModel(String),

    /// Router produced a provider no other component has a case for.
    /// Unreachable while `Provider` and its match arms stay in sync.
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(Provider),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
