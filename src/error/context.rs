//! Error context for enriched error information.
//!
//! Context structures attached to errors so log lines can say which
//! operation, capture invocation and counter domain a failure belongs to.

use chrono::{DateTime, Utc};

/// Context information attached to errors for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Capture-and-share invocation id, when the failure belongs to one.
    pub invocation_id: Option<String>,

    /// Storage key or tally domain involved.
    pub key: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Optional component/module where the error originated.
    pub component: Option<String>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            invocation_id: None,
            key: None,
            timestamp: Utc::now(),
            component: None,
        }
    }

    /// Set the capture invocation id for this context.
    pub fn with_invocation_id(mut self, id: impl Into<String>) -> Self {
        self.invocation_id = Some(id.into());
        self
    }

    /// Set the storage key for this context.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the component for this context.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref id) = self.invocation_id {
            parts.push(format!("invocation={}", id));
        }

        if let Some(ref key) = self.key {
            parts.push(format!("key={}", key));
        }

        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref key) = self.key {
            write!(f, " key={}", key)?;
        }

        if let Some(ref id) = self.invocation_id {
            write!(f, " invocation={}", id)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_new() {
        let ctx = ErrorContext::new("increment_tally");

        assert_eq!(ctx.operation, "increment_tally");
        assert!(ctx.invocation_id.is_none());
        assert!(ctx.key.is_none());
        assert!(ctx.component.is_none());
    }

    #[test]
    fn test_context_builder_pattern() {
        let ctx = ErrorContext::new("deliver_image")
            .with_invocation_id("inv-1")
            .with_key("ihsan_tasbeeh_subhanallah")
            .with_component("capture");

        assert_eq!(ctx.invocation_id, Some("inv-1".to_string()));
        assert_eq!(ctx.key, Some("ihsan_tasbeeh_subhanallah".to_string()));
        assert_eq!(ctx.component, Some("capture".to_string()));
    }

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("record_visit").with_key("streak_count");
        assert_eq!(ctx.to_string(), "[record_visit] key=streak_count");
    }

    #[test]
    fn test_context_log_string() {
        let ctx = ErrorContext::new("share").with_invocation_id("abc");
        let log = ctx.to_log_string();
        assert!(log.starts_with("operation=share invocation=abc"));
        assert!(log.contains("timestamp="));
    }

    #[test]
    fn test_context_default() {
        assert_eq!(ErrorContext::default().operation, "unknown");
    }
}
