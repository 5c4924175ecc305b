use std::fmt::Display;
use thiserror::Error;

pub mod codes;
pub mod helpers;


pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for the basis utilities
#[derive(Error, Debug)]
pub enum BasisError {
    #[error("[E{code:04}] Invalid argument: {message}")]
    InvalidArgument {
        code: u16,
        message: String,
        argument: Option<String>,
    },

    #[error("[E{code:04}] Runtime failure: {message}")]
    Runtime { code: u16, message: String },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BasisError {
    /// Create an invalid-argument error with specific code and argument name
    pub fn invalid_argument_with_code(
        code: u16,
        message: impl Into<String>,
        argument: Option<String>,
    ) -> Self {
        Self::InvalidArgument {
            code,
            message: message.into(),
            argument,
        }
    }

    /// Create a runtime failure with specific code
    pub fn runtime_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Runtime {
            code,
            message: message.into(),
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    ///
    /// Only configuration errors carry a source; other kinds are returned unchanged.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::InvalidArgument { .. } | Self::Runtime { .. } => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::InvalidArgument { message, .. }
            | Self::Runtime { message, .. }
            | Self::Config { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidArgument { code, .. }
            | Self::Runtime { code, .. }
            | Self::Config { code, .. } => *code,
        }
    }

    /// Check whether this error reports a bad caller-supplied argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Type alias for Results using BasisError
pub type Result<T> = std::result::Result<T, BasisError>;
