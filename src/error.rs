//! Error types for toolpick operations.
//!
//! This module defines [`ToolpickError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ToolpickError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ToolpickError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolpick operations.
#[derive(Debug, Error)]
pub enum ToolpickError {
    /// Catalog file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the catalog file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Catalog parsed but failed validation.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A tool identifier that is not in the catalog.
    #[error("Unknown tool: {id}")]
    UnknownTool { id: String },

    /// The generated script could not be written.
    #[error("Failed to write script to {path}: {message}")]
    ScriptWriteError { path: PathBuf, message: String },

    /// The preferences file could not be read or written.
    #[error("Preferences error at {path}: {message}")]
    PreferencesError { path: PathBuf, message: String },

    /// A terminal emulator could not be launched.
    #[error("Failed to launch script: {message}")]
    LaunchError { message: String },

    /// Downloading the catalog from a remote URL failed.
    #[error("Failed to fetch {url}: {message}")]
    RemoteFetchError { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toolpick operations.
pub type Result<T> = std::result::Result<T, ToolpickError>;
