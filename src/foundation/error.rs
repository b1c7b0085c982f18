/// Result alias used by the fallible edges of the crate.
pub type BakeResult<T> = Result<T, BakeError>;

/// Errors raised outside the bake loop itself.
///
/// Baking is total: tags that do not resolve and optional fields that are missing degrade to
/// defaults. Only payload/config parsing, config validation and font-backed measurement can fail.
#[derive(thiserror::Error, Debug)]
pub enum BakeError {
    /// A configuration value is outside its accepted domain.
    #[error("validation error: {0}")]
    Validation(String),

    /// The text measurement context could not be created.
    #[error("measurement error: {0}")]
    Measurement(String),

    /// Payload or config JSON could not be decoded.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BakeError {
    /// Build a [`BakeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BakeError::Measurement`].
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Build a [`BakeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BakeError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
