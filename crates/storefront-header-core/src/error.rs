//! Error types for storefront-header-core
//!
//! Expected states (missing anchor, logo still loading) are not errors.
//! Everything here ends up as reduced rendering, never as a panic.

use thiserror::Error;

/// Core error type for header operations
#[derive(Error, Debug)]
pub enum HeaderError {
    // ===================
    // Observer Errors
    // ===================
    #[error("Invalid intersection threshold: {value} (expected 0.0..=1.0)")]
    InvalidThreshold { value: f64 },

    #[error("Failed to start intersection observation: {message}")]
    ObserveFailed { message: String },

    // ===================
    // Overlay Errors
    // ===================
    #[error("Search overlay failed to load: {message}")]
    OverlayLoad { message: String },

    // ===================
    // Collaborator Errors
    // ===================
    #[error("Logo fetch failed: {message}")]
    LogoFetch { message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid header configuration: {message}")]
    InvalidConfig {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// How a failure shows up on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// A slot renders less than it would on success
    Degraded,
    /// Must be handed to an outer fallback boundary
    Boundary,
}

impl HeaderError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HeaderError::OverlayLoad { .. } => ErrorSeverity::Boundary,
            HeaderError::InvalidThreshold { .. }
            | HeaderError::ObserveFailed { .. }
            | HeaderError::LogoFetch { .. }
            | HeaderError::InvalidConfig { .. } => ErrorSeverity::Degraded,
        }
    }

    /// Returns true when the failure must reach a fallback boundary
    pub fn needs_boundary(&self) -> bool {
        self.severity() == ErrorSeverity::Boundary
    }

    pub fn overlay_load(message: impl Into<String>) -> Self {
        HeaderError::OverlayLoad {
            message: message.into(),
        }
    }

    pub fn logo_fetch(message: impl Into<String>) -> Self {
        HeaderError::LogoFetch {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_overlay_failures_need_boundary() {
        assert!(HeaderError::overlay_load("chunk 404").needs_boundary());
        assert!(!HeaderError::logo_fetch("500").needs_boundary());
        assert!(!HeaderError::InvalidThreshold { value: 2.0 }.needs_boundary());
    }

    #[test]
    fn test_overlay_failure_goes_to_boundary() {
        let err = HeaderError::overlay_load("network");
        assert_eq!(err.severity(), ErrorSeverity::Boundary);
        assert_eq!(err.to_string(), "Search overlay failed to load: network");
    }

    #[test]
    fn test_logo_failure_degrades() {
        assert_eq!(
            HeaderError::logo_fetch("500").severity(),
            ErrorSeverity::Degraded
        );
    }
}
