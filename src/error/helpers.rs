use super::{BasisError, ErrorCode};

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to a configuration error
    fn to_config_error(self, message: impl Into<String>) -> Result<T, BasisError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, BasisError> {
        self.map_err(|e| BasisError::config(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// A mapping argument was null
    pub fn null_object(argument: &str) -> BasisError {
        BasisError::invalid_argument_with_code(
            ErrorCode::ARG_NULL_OBJECT,
            format!("'{}' must be a mapping, got null", argument),
            Some(argument.to_string()),
        )
    }

    /// A key list argument was null
    pub fn null_keys(argument: &str) -> BasisError {
        BasisError::invalid_argument_with_code(
            ErrorCode::ARG_NULL_KEYS,
            format!("'{}' must be a list of keys, got null", argument),
            Some(argument.to_string()),
        )
    }

    /// An argument had the wrong shape
    pub fn wrong_type(argument: &str, expected: &str, found: &str) -> BasisError {
        BasisError::invalid_argument_with_code(
            ErrorCode::ARG_INVALID_TYPE,
            format!("'{}' must be a {}, got {}", argument, expected, found),
            Some(argument.to_string()),
        )
    }

    /// A callback panicked
    pub fn callback_panicked(message: &str) -> BasisError {
        BasisError::runtime_with_code(
            ErrorCode::RUNTIME_PANIC,
            format!("callback panicked: {}", message),
        )
    }
}
