//! Error type definitions for curve operations

use alloc::borrow::Cow;

/// Primary error type for curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error
    InvalidParameter {
        /// Where the parameter was rejected
        context: &'static str,
        /// Why the parameter was rejected
        message: Cow<'static, str>,
    },

    /// Coordinates that do not satisfy the curve equation
    InvalidPoint {
        /// Where the point was rejected
        context: &'static str,
    },
}

/// Result type for curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
        }
    }

    /// Replace the message of an existing error. Errors without a message are returned as is.
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter {
                context,
                message: message.into(),
            },
            other => other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            Self::InvalidPoint { context } => {
                write!(f, "Point is not on the curve in {}", context)
            }
        }
    }
}
