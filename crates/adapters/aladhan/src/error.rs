//! aladhan-specific error type, boxed into [`MihrabError::Upstream`].

use mihrab_domain::error::MihrabError;

/// Errors originating from the aladhan.com client.
#[derive(Debug, thiserror::Error)]
pub enum AladhanError {
    /// The HTTP request could not be completed.
    #[error("http transport failure")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read as the expected JSON shape.
    #[error("response body did not match the expected shape")]
    Decode(#[source] reqwest::Error),

    /// The API envelope reported a non-success code.
    #[error("aladhan returned code {0}")]
    Api(i64),

    /// A field inside an otherwise well-formed response was unusable.
    #[error("malformed response field: {0}")]
    Malformed(&'static str),
}

impl AladhanError {
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

impl From<AladhanError> for MihrabError {
    fn from(err: AladhanError) -> Self {
        Self::Upstream(Box::new(err))
    }
}
