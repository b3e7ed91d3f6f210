/// Convenience result type used across LifeGrid.
pub type LifeGridResult<T> = Result<T, LifeGridError>;

/// Top-level error taxonomy used by the fallible input boundaries.
///
/// The numeric engine itself never fails: out-of-domain values are clamped. Errors only surface
/// where user-provided data enters the crate (constructors, JSON documents, list edits).
#[derive(thiserror::Error, Debug)]
pub enum LifeGridError {
    /// Invalid user-provided parameters or activities.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or inconsistent configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LifeGridError {
    /// Build a [`LifeGridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LifeGridError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LifeGridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
