//! quran.com-specific error type, boxed into [`MihrabError::Upstream`].

use mihrab_domain::error::MihrabError;

/// Errors originating from the quran.com client.
#[derive(Debug, thiserror::Error)]
pub enum QuranComError {
    /// The HTTP request could not be completed.
    #[error("http transport failure")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read as the expected JSON shape.
    #[error("response body did not match the expected shape")]
    Decode(#[source] reqwest::Error),
}

impl QuranComError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }

    pub(crate) fn decode(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}

impl From<QuranComError> for MihrabError {
    fn from(err: QuranComError) -> Self {
        Self::Upstream(Box::new(err))
    }
}
