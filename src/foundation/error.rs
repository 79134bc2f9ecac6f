/// Result alias used throughout the crate.
pub type PaperResult<T> = Result<T, PaperError>;

/// Errors produced while loading, rendering or writing screens.
#[derive(thiserror::Error, Debug)]
pub enum PaperError {
    /// Malformed screen set, directive or option.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Writing an output image failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON could not be read or written.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PaperError {
    /// Build a [`PaperError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PaperError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PaperError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PaperError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
