//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only file access can fail. A missing anchor is not an error: the pass
//! that owns it leaves the content alone.

use derive_more::{Display, From};
use std::path::Path;

/// The Global Error Enum.
///
/// I/O failures are wrapped with the path they concern; strings become `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Wraps a failed read of the target file, keeping the path in the message.
    pub fn read(path: &Path, err: std::io::Error) -> Self {
        AppError::General(format!("Failed to read file {:?}: {}", path, err))
    }

    /// Wraps a failed write of the target file, keeping the path in the message.
    pub fn write(path: &Path, err: std::io::Error) -> Self {
        AppError::General(format!("Failed to write file {:?}: {}", path, err))
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
