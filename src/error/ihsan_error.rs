//! Unified error type for the Ihsan crate.
//!
//! `IhsanError` consolidates the seam-level errors into a single enum so
//! callers can categorize, log and message failures uniformly.

use std::fmt;

use super::capture::CaptureError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use crate::traits::{ShareError, StoreError};

/// Unified error type for the Ihsan crate.
#[derive(Debug)]
pub enum IhsanError {
    /// Local persistent storage failures.
    Storage(StoreError),

    /// Capture pipeline failures (rendering, delivery, cancellation).
    Capture(CaptureError),

    /// Configuration failures.
    Config(ConfigError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<IhsanError>,
        context: ErrorContext,
    },
}

impl IhsanError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            IhsanError::Storage(_) => ErrorCategory::Storage,
            IhsanError::Capture(err) => match err {
                CaptureError::Cancelled | CaptureError::Share(ShareError::Cancelled) => {
                    ErrorCategory::Cancelled
                }
                CaptureError::Raster(_) | CaptureError::Encode(_) => ErrorCategory::Rendering,
                CaptureError::TimedOut { step, .. } if matches!(*step, "fonts" | "rasterize") => {
                    ErrorCategory::Rendering
                }
                CaptureError::Share(_)
                | CaptureError::Clipboard(_)
                | CaptureError::Delivery(_)
                | CaptureError::TimedOut { .. } => ErrorCategory::Delivery,
            },
            IhsanError::Config(_) => ErrorCategory::Configuration,
            IhsanError::WithContext { error, .. } => error.category(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            IhsanError::Storage(err) => format!("Progress could not be saved: {}", err),
            IhsanError::Capture(err) => match self.category() {
                ErrorCategory::Rendering => format!("Generation failed: {}", err),
                ErrorCategory::Cancelled => "Cancelled".to_string(),
                _ => format!("Share failed: {}", err),
            },
            IhsanError::Config(err) => err.to_string(),
            IhsanError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            IhsanError::Storage(err) => err.error_code(),
            IhsanError::Capture(err) => err.error_code(),
            IhsanError::Config(err) => err.error_code(),
            IhsanError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        IhsanError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            IhsanError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &IhsanError {
        match self {
            IhsanError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for IhsanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IhsanError::Storage(err) => write!(f, "{}", err),
            IhsanError::Capture(err) => write!(f, "{}", err),
            IhsanError::Config(err) => write!(f, "{}", err),
            IhsanError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for IhsanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IhsanError::Storage(err) => Some(err),
            IhsanError::Capture(err) => Some(err),
            IhsanError::Config(err) => Some(err),
            IhsanError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<StoreError> for IhsanError {
    fn from(err: StoreError) -> Self {
        IhsanError::Storage(err)
    }
}

impl From<CaptureError> for IhsanError {
    fn from(err: CaptureError) -> Self {
        IhsanError::Capture(err)
    }
}

impl From<ConfigError> for IhsanError {
    fn from(err: ConfigError) -> Self {
        IhsanError::Config(err)
    }
}

impl From<serde_json::Error> for IhsanError {
    fn from(err: serde_json::Error) -> Self {
        IhsanError::Storage(StoreError::Serialization(err.to_string()))
    }
}

impl From<std::io::Error> for IhsanError {
    fn from(err: std::io::Error) -> Self {
        IhsanError::Storage(StoreError::from(err))
    }
}
