use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed listing response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, BrowserError>;
