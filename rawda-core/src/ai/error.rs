use anyhow::anyhow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    /// The provider answered but produced no structured output.
    #[error("model returned no structured output")]
    EmptyResult,

    #[error("transport error: {0}")]
    Transport(anyhow::Error),

    /// The provider returned something, but not the requested shape.
    #[error("malformed response: {0}")]
    InvalidResponse(anyhow::Error),
}

impl From<serde_json::Error> for GenerationError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidResponse(anyhow!(source))
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport(anyhow!(source))
    }
}
