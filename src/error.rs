//! Error types for the Elidune circulation desk

use thiserror::Error;

/// Outcome codes shared with the Elidune server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotAuthorized = 2,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    MaxBorrowsReached = 11,
    BadValue = 18,
    NotBorrowed = 22,
    InvalidChoice = 23,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{reader} has reached the maximum number of loans ({max}).")]
    LimitReached { reader: String, max: usize },

    #[error("The document '{0}' is not available.")]
    Unavailable(String),

    #[error("{reader} has not borrowed the document '{title}'.")]
    NotBorrowed { reader: String, title: String },

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid choice: {0}. Please try again.")]
    InvalidChoice(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::LimitReached { .. } => ErrorCode::MaxBorrowsReached,
            AppError::Unavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::NotBorrowed { .. } => ErrorCode::NotBorrowed,
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::InvalidChoice(_) => ErrorCode::InvalidChoice,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Authentication(_) => ErrorCode::NotAuthorized,
            AppError::Configuration(_) | AppError::Io(_) | AppError::Internal(_) => {
                ErrorCode::Failure
            }
        }
    }

    /// Whether the session can go on after this error was shown to the user
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AppError::Configuration(_) | AppError::Io(_) | AppError::Internal(_)
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join(", "))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_recoverable() {
        let err = AppError::LimitReached { reader: "Amina".to_string(), max: 3 };
        assert!(err.is_recoverable());
        assert_eq!(err.code(), ErrorCode::MaxBorrowsReached);
        assert_eq!(
            err.to_string(),
            "Amina has reached the maximum number of loans (3)."
        );
    }

    #[test]
    fn test_io_errors_are_fatal() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert!(!err.is_recoverable());
        assert_eq!(err.code() as u32, 1);
    }
}
