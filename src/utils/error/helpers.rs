//! Helper functions for creating specific error types

use super::types::AppError;

impl AppError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn launch<S: Into<String>>(message: S) -> Self {
        Self::Launch(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::BadRequest(_))
    }

    /// Bare message without the variant prefix, suitable for response bodies
    pub fn detail(&self) -> String {
        match self {
            Self::Config(msg)
            | Self::StoreUnavailable(msg)
            | Self::Validation(msg)
            | Self::BadRequest(msg)
            | Self::Launch(msg)
            | Self::Internal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
