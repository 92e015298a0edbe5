/// Convenience result type used across NaviCue.
pub type NaviCueResult<T> = Result<T, NaviCueError>;

/// Top-level error taxonomy used by compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum NaviCueError {
    /// Invalid user-provided data or a violated output invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A label outside one of the closed taxonomy sets.
    #[error("unknown {axis} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        /// Taxonomy axis name (e.g. `signature`, `form`).
        axis: &'static str,
        /// The rejected input, as given.
        value: String,
        /// Comma separated list of accepted values.
        expected: String,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NaviCueError {
    /// Build a [`NaviCueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`NaviCueError::UnknownVariant`] value listing the accepted names.
    pub fn unknown_variant(axis: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownVariant {
            axis,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Build a [`NaviCueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
