// Centralized error handling module
// Provides error types with path and operation context for all operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for dirsum
/// Provides context-rich error messages with file paths and operations
#[derive(Debug)]
pub enum DirsumError {
    /// File system errors with context
    FileNotFound { path: PathBuf },
    NotAFile { path: PathBuf },
    DirectoryNotFound { path: PathBuf },
    NotADirectory { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },
}

impl fmt::Display for DirsumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DirsumError::FileNotFound { path } => {
                write!(f, "File not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the file path is correct and the file exists")
            }
            DirsumError::NotAFile { path } => {
                write!(f, "Not a regular file: {}\n", path.display())?;
                write!(f, "Suggestion: --file_path must point to a regular file")
            }
            DirsumError::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the directory path is correct and the directory exists")
            }
            DirsumError::NotADirectory { path } => {
                write!(f, "Not a directory: {}\n", path.display())?;
                write!(f, "Suggestion: --dir_path must point to a directory")
            }
            DirsumError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied while {} file: {}\n", operation, path.display())?;
                write!(f, "Suggestion: Check file permissions or run with appropriate privileges")
            }
            DirsumError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "I/O error while {} file {}: {}\n", operation, p.display(), source)?;
                } else {
                    write!(f, "I/O error while {}: {}\n", operation, source)?;
                }
                write!(f, "Suggestion: Check file permissions and disk space")
            }
        }
    }
}

impl std::error::Error for DirsumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirsumError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl DirsumError {
    /// Create an IoError with context about the operation and optional path
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        // Check for specific error kinds and provide more specific errors
        match err.kind() {
            io::ErrorKind::NotFound => {
                if let Some(p) = path {
                    if operation.contains("directory") {
                        DirsumError::DirectoryNotFound { path: p }
                    } else {
                        DirsumError::FileNotFound { path: p }
                    }
                } else {
                    DirsumError::IoError {
                        path: None,
                        operation: operation.to_string(),
                        source: err,
                    }
                }
            }
            io::ErrorKind::PermissionDenied => {
                if let Some(p) = path {
                    DirsumError::PermissionDenied {
                        path: p,
                        operation: operation.to_string(),
                    }
                } else {
                    DirsumError::IoError {
                        path: None,
                        operation: operation.to_string(),
                        source: err,
                    }
                }
            }
            _ => DirsumError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}

// Default From implementation for io::Error (without context)
impl From<io::Error> for DirsumError {
    fn from(err: io::Error) -> Self {
        DirsumError::from_io_error(err, "unknown operation", None)
    }
}
