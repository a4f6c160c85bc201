//! Result and error types for the sticky panel.

use thiserror::Error;

/// Result type for sticky panel operations
pub type StickyResult<T> = Result<T, StickyError>;

/// Errors that can occur while driving a sticky panel
#[derive(Debug, Error)]
pub enum StickyError {
    /// The pinned child could not be found in the document
    #[error("No element matches child selector `{selector}`")]
    ElementNotFound {
        /// Selector that matched nothing
        selector: String,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// A DOM call failed on the host
    #[error("DOM operation failed: {message}")]
    Dom {
        /// Error message
        message: String,
    },

    /// Configuration JSON could not be decoded
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl StickyError {
    /// Shorthand for [`StickyError::InvalidConfig`]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Shorthand for [`StickyError::Dom`]
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_display() {
        let err = StickyError::ElementNotFound {
            selector: ".sticky-panel".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No element matches child selector `.sticky-panel`"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let err = StickyError::invalid_config("top_space must be finite");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: top_space must be finite"
        );
    }

    #[test]
    fn test_dom_display() {
        let err = StickyError::dom("style is read-only");
        assert!(err.to_string().contains("style is read-only"));
    }

    #[test]
    fn test_json_from() {
        let parse = serde_json::from_str::<serde_json::Value>("{");
        let err: StickyError = parse.unwrap_err().into();
        assert!(matches!(err, StickyError::Json(_)));
    }
}
