//! Domain error types
//!
//! This module defines the error hierarchy for Textscrub. Library code returns
//! [`ScrubError`]; the CLI layer wraps it in `anyhow` and maps it to exit codes.

use thiserror::Error;

/// Main Textscrub error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Configuration-related errors (unknown scrubber category, bad settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The tagging model could not be loaded
    #[error("Initialization error: {0}")]
    Initialization(#[from] TaggerError),

    /// Input dataset does not have the expected shape
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Tagging model errors
///
/// Raised when the tagging model resource cannot be turned into a usable tagger.
/// These are fatal: the pipeline cannot anonymize without a tagger.
#[derive(Debug, Clone, Error)]
pub enum TaggerError {
    /// Model file does not exist
    #[error("Tagging model not found: {0}")]
    ModelNotFound(String),

    /// Model file exists but could not be read
    #[error("Failed to load tagging model: {0}")]
    ModelLoadFailed(String),

    /// Model content is malformed
    #[error("Invalid tagging model: {0}")]
    InvalidModel(String),
}

impl ScrubError {
    /// Process exit code used by the CLI for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) | Self::Validation(_) => 2,
            Self::Initialization(_) => 3,
            Self::Dataset(_) | Self::Serialization(_) => 4,
            Self::Io(_) | Self::Other(_) => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ScrubError {
    fn from(err: std::io::Error) -> Self {
        ScrubError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ScrubError {
    fn from(err: serde_json::Error) -> Self {
        ScrubError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ScrubError {
    fn from(err: toml::de::Error) -> Self {
        ScrubError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_error_display() {
        let err = ScrubError::Configuration("Unknown scrubber category 'zip'".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown scrubber category 'zip'"
        );
    }

    #[test]
    fn test_tagger_error_conversion() {
        let tagger_err = TaggerError::ModelNotFound("models/missing.toml".to_string());
        let scrub_err: ScrubError = tagger_err.into();
        assert!(matches!(scrub_err, ScrubError::Initialization(_)));
        assert_eq!(
            scrub_err.to_string(),
            "Initialization error: Tagging model not found: models/missing.toml"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ScrubError::Configuration("x".into()).exit_code(), 2);
        assert_eq!(
            ScrubError::Initialization(TaggerError::InvalidModel("x".into())).exit_code(),
            3
        );
        assert_eq!(ScrubError::Dataset("x".into()).exit_code(), 4);
        assert_eq!(ScrubError::Io("x".into()).exit_code(), 5);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let scrub_err: ScrubError = io_err.into();
        assert!(matches!(scrub_err, ScrubError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let scrub_err: ScrubError = json_err.into();
        assert!(matches!(scrub_err, ScrubError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let scrub_err: ScrubError = toml_err.into();
        assert!(matches!(scrub_err, ScrubError::Configuration(_)));
        assert!(scrub_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_scrub_error_implements_std_error() {
        let err = ScrubError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
