/// Convenience result type used across the crate.
pub type SliceframeResult<T> = Result<T, SliceframeError>;

/// Top-level error taxonomy used by the pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum SliceframeError {
    /// Invalid caller-provided data that cannot be clamped into range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or reading back the output surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing parameter presets.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SliceframeError {
    /// Build a [`SliceframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SliceframeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SliceframeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
