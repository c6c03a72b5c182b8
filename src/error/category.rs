//! Error category classification for unified error handling.
//!
//! Categories drive the propagation policy: lower-level failures are logged
//! and swallowed, only pipeline-terminal failures reach the user, and user
//! cancellation is never reported at all.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Local persistent storage failures (quota, disabled storage, I/O).
    /// Logged and degraded to default state.
    Storage,

    /// Rasterization or image encoding failures.
    /// Terminal for the capture attempt; shown to the user immediately.
    Rendering,

    /// A delivery channel (share sheet, download, browser) failed.
    /// Handled by the fallback chain; only the exhausted chain is shown.
    Delivery,

    /// The user dismissed a share dialog or the invocation was cancelled.
    /// Not an error from the user's point of view.
    Cancelled,

    /// Configuration issues (unreadable config file, bad values).
    Configuration,

    /// Programming errors (invalid state, bad input data).
    Client,
}

impl ErrorCategory {
    /// Returns true if errors in this category should surface as a
    /// user-visible notice when they end a user-triggered action.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Rendering | ErrorCategory::Delivery | ErrorCategory::Configuration
        )
    }

    /// Returns true if the failure is silently swallowed after logging.
    pub fn is_silent(&self) -> bool {
        matches!(self, ErrorCategory::Storage | ErrorCategory::Cancelled)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Storage => "storage",
            ErrorCategory::Rendering => "rendering",
            ErrorCategory::Delivery => "delivery",
            ErrorCategory::Cancelled => "cancelled",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Client => "client",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Storage => "Local storage unavailable",
            ErrorCategory::Rendering => "Image generation problem",
            ErrorCategory::Delivery => "Sharing problem",
            ErrorCategory::Cancelled => "Cancelled",
            ErrorCategory::Configuration => "Configuration problem",
            ErrorCategory::Client => "Application error",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Storage => "Progress tracking is paused until storage is available again",
            ErrorCategory::Rendering => "Try saving the card again",
            ErrorCategory::Delivery => "The image was downloaded instead; share it from your files",
            ErrorCategory::Cancelled => "",
            ErrorCategory::Configuration => "Check ~/.ihsan/config.toml and IHSAN_* variables",
            ErrorCategory::Client => "This may be a bug. Please report this issue if it persists",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
