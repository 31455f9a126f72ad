//! Error types for the bookrack application.
//!
//! This module defines the centralized error type [`BookrackError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for bookrack operations.
///
/// This enum consolidates all error conditions that can occur while running
/// the browser, from catalog decoding to terminal I/O failures and
/// configuration issues. Variants wrapping underlying errors from external
/// crates use `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum BookrackError {
    /// The bundled or supplied catalog document could not be decoded.
    ///
    /// The string contains a description of what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or terminal I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for bookrack operations.
///
/// Type alias for `std::result::Result<T, BookrackError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, BookrackError>;
