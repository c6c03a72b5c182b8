//! Result type alias for Ihsan operations.

use super::context::ErrorContext;
use super::ihsan_error::IhsanError;

/// Type alias for Results using IhsanError.
pub type IhsanResult<T> = Result<T, IhsanError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use ihsan::error::{ErrorContext, ResultExt};
    ///
    /// let raw = store
    ///     .get(key)
    ///     .await
    ///     .context(ErrorContext::new("load_tally").with_key(key))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> IhsanResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> IhsanResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<IhsanError>,
{
    fn context(self, ctx: ErrorContext) -> IhsanResult<T> {
        self.map_err(|e| {
            let err: IhsanError = e.into();
            err.with_context(ctx)
        })
    }

    fn with_context<F>(self, f: F) -> IhsanResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| {
            let err: IhsanError = e.into();
            err.with_context(f())
        })
    }
}
