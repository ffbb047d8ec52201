//! Error types for Expandable Layout.
//!
//! The animated expand/collapse operations never fail; errors only come from
//! checked setters and from the configuration surface.

use std::path::PathBuf;

/// Result type alias for Expandable Layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Expandable Layout operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An expansion fraction outside `[0, 1]` or not finite.
    #[error("Invalid expansion {value}: must be a finite value in [0, 1]")]
    InvalidExpansion { value: f32 },

    /// A displacement factor that is negative or not finite.
    #[error("Invalid displacement {value}: must be a finite, non-negative value")]
    InvalidDisplacement { value: f32 },

    /// A configuration field holds an unusable value.
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    /// Configuration text could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// File I/O error while reading or writing configuration.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an expansion error.
    pub fn invalid_expansion(value: f32) -> Self {
        Self::InvalidExpansion { value }
    }

    /// Create a displacement error.
    pub fn invalid_displacement(value: f32) -> Self {
        Self::InvalidDisplacement { value }
    }

    /// Create a configuration value error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::invalid_expansion(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid expansion 1.5: must be a finite value in [0, 1]"
        );

        let err = Error::invalid_config("displacement", "must be finite");
        assert!(err.to_string().contains("'displacement'"));
    }

    #[test]
    fn test_io_source() {
        use std::error::Error as _;

        let err = Error::io(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_from_toml_error() {
        let parse_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::ConfigParse(_)));
    }
}
