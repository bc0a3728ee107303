//! Error types for the gymcopy generators.

use thiserror::Error;

/// A shared error type for the copy generators.
///
/// Argument whitelisting failures surface as `InvalidArgument`; the remaining
/// variants cover catalog gaps and the file/config boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GymCopyError {
    /// Unknown persona, undefined age group, or a rejected config value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No templates are defined for the requested category/key combination
    #[error("No {category} templates defined for '{key}'")]
    TemplateNotFound { category: String, key: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GymCopyError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a TemplateNotFound error
    pub fn template_not_found(category: impl Into<String>, key: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            category: category.into(),
            key: key.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidArgument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a TemplateNotFound error
    pub fn is_template_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for GymCopyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GymCopyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GymCopyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, GymCopyError>`.
pub type Result<T> = std::result::Result<T, GymCopyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_message() {
        let err = GymCopyError::template_not_found("body_copy", "competition");
        assert_eq!(
            err.to_string(),
            "No body_copy templates defined for 'competition'"
        );
        assert!(err.is_template_not_found());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GymCopyError = io.into();
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("seed = ");
        let err: GymCopyError = parsed.unwrap_err().into();
        assert!(matches!(err, GymCopyError::Serialization { ref format, .. } if format == "TOML"));
    }
}
