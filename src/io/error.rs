//! Error types for generation operations
//!
//! The core pipeline always terminates and always produces a grid, so the
//! taxonomy is small: configuration mistakes caught at construction, and
//! filesystem trouble while exporting. Degraded generation outcomes are
//! ordinary return values, never errors.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Construction parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write a level text file to disk
    LevelExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a PNG preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LevelExport { path, source } => {
                write!(f, "Failed to export level to '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LevelExport { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::invalid_parameter;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("width", &0, &"must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width' = '0': must be positive"
        );
    }
}
