//! Outcome of a form field check.

use std::error::Error;
use std::fmt;

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Verdict on a configuration value: accepted, or rejected with a message
/// and optionally the underlying error for diagnostics.
#[derive(Debug)]
pub enum FormValidation {
    Ok,
    Error {
        message: String,
        cause: Option<Cause>,
    },
}

impl FormValidation {
    pub fn error(message: impl Into<String>) -> Self {
        FormValidation::Error {
            message: message.into(),
            cause: None,
        }
    }

    pub fn error_with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        FormValidation::Error {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, FormValidation::Ok)
    }

    /// Error message, or `None` for `Ok`.
    pub fn message(&self) -> Option<&str> {
        match self {
            FormValidation::Ok => None,
            FormValidation::Error { message, .. } => Some(message),
        }
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            FormValidation::Error {
                cause: Some(c), ..
            } => Some(c.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValidation::Ok => write!(f, "ok"),
            FormValidation::Error {
                message,
                cause: None,
            } => write!(f, "error: {}", message),
            FormValidation::Error {
                message,
                cause: Some(c),
            } => write!(f, "error: {} ({})", message, c),
        }
    }
}
