use thiserror::Error;

/// Errors raised by the domain model, the services and the storage layer.
///
/// Every variant is terminal for the operation that raised it: nothing is
/// written to storage once an error has been returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubwayError {
    /// A request broke a precondition (unknown endpoints, duplicate section,
    /// split distance too long, removing the last section, ...)
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    DuplicateName(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl SubwayError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SubwayError>;
