//! Unified error handling architecture for Ihsan.
//!
//! - **Error Categories**: classification that decides who sees a failure
//! - **Domain-specific Errors**: capture and configuration errors; storage
//!   and delivery seams define theirs next to their traits
//! - **Unified Error Type**: `IhsanError` consolidates all error types
//! - **Error Context**: operation, invocation and key attached to errors
//! - **Result Type Alias**: `IhsanResult<T>`
//!
//! # Error Categories
//!
//! | Category | Description | Shown to user |
//! |----------|-------------|---------------|
//! | Storage | Quota, disabled storage, I/O | No (logged, default state) |
//! | Rendering | Rasterization or PNG encoding | Yes (blocking alert) |
//! | Delivery | Share sheet, download, browser | Only when the fallback chain is exhausted |
//! | Cancelled | Share dialog dismissed, token cancelled | Never |
//! | Configuration | Config file or env values | Yes |
//! | Client | Invalid data | No |

mod capture;
mod category;
mod config;
mod context;
mod ihsan_error;
mod result;

pub use capture::CaptureError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use ihsan_error::IhsanError;
pub use result::{IhsanResult, ResultExt};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::traits::{DeliveryError, RasterError, ShareError, StoreError};

    /// Only rendering failures and exhausted delivery reach the user.
    #[test]
    fn test_propagation_policy() {
        let silent: Vec<IhsanError> = vec![
            StoreError::QuotaExceeded.into(),
            StoreError::Unavailable("private mode".into()).into(),
            CaptureError::Share(ShareError::Cancelled).into(),
            CaptureError::Cancelled.into(),
        ];
        for err in silent {
            assert!(
                !err.category().is_user_facing(),
                "Expected {:?} to stay silent",
                err
            );
        }

        let visible: Vec<IhsanError> = vec![
            CaptureError::Raster(RasterError::Failed("x".into())).into(),
            CaptureError::Delivery(DeliveryError::Io("disk full".into())).into(),
            ConfigError::NoHomeDirectory.into(),
        ];
        for err in visible {
            assert!(
                err.category().is_user_facing(),
                "Expected {:?} to be user facing",
                err
            );
        }
    }

    #[test]
    fn test_all_errors_have_codes() {
        let errors: Vec<IhsanError> = vec![
            StoreError::Io("read".into()).into(),
            CaptureError::Encode("bad buffer".into()).into(),
            ConfigError::NoHomeDirectory.into(),
        ];
        for err in errors {
            assert!(err.error_code().starts_with("E_"));
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_result_ext_on_capture() {
        fn might_fail() -> Result<(), CaptureError> {
            Err(CaptureError::Cancelled)
        }

        let err = might_fail()
            .context(ErrorContext::new("share").with_invocation_id("inv-9"))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Cancelled);
        assert_eq!(err.context().unwrap().invocation_id.as_deref(), Some("inv-9"));
    }
}
