use anyhow::anyhow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthesisError {
    /// The speech model answered without a usable media reference.
    #[error("no audio returned from the speech model")]
    NoAudio,

    #[error("transport error: {0}")]
    Transport(anyhow::Error),

    /// The media reference exists but its payload cannot be decoded.
    #[error("malformed audio payload: {0}")]
    InvalidPayload(anyhow::Error),
}

impl From<reqwest::Error> for SynthesisError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport(anyhow!(source))
    }
}

impl From<base64::DecodeError> for SynthesisError {
    fn from(source: base64::DecodeError) -> Self {
        Self::InvalidPayload(anyhow!(source))
    }
}

impl From<std::io::Error> for SynthesisError {
    fn from(source: std::io::Error) -> Self {
        Self::InvalidPayload(anyhow!(source))
    }
}
