//! Error types for the Shelfmark catalog core

use thiserror::Error;

/// Stable error codes surfaced to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    BadValue = 2,
    NoSuchItem = 3,
    ItemNotAvailable = 4,
    ItemAlreadyAvailable = 5,
    NothingToUndo = 6,
}

/// Main application error type
///
/// Every variant is a value-level result returned to the immediate caller;
/// none is fatal and none triggers a retry. The core performs no user-facing
/// formatting: the front-end maps error kinds to display messages.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Item not available: {0}")]
    ItemUnavailable(String),

    #[error("Item already available: {0}")]
    ItemAlreadyAvailable(String),

    #[error("Nothing to undo")]
    EmptyHistory,
}

impl AppError {
    /// Numeric code for this error, for callers that surface codes rather
    /// than messages.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::ItemUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::ItemAlreadyAvailable(_) => ErrorCode::ItemAlreadyAvailable,
            AppError::EmptyHistory => ErrorCode::NothingToUndo,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::EmptyHistory.code(), ErrorCode::NothingToUndo);
        assert_eq!(
            AppError::NotFound("x".to_string()).code(),
            ErrorCode::NoSuchItem
        );
        assert_eq!(
            AppError::Validation("blank".to_string()).code(),
            ErrorCode::BadValue
        );
    }
}
