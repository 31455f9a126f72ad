//! Application path utilities.
//!
//! Resolves the per-user data directory where bookrack keeps its log file.
//! Nothing else is persisted: the catalog is bundled and themes are either
//! embedded or explicitly supplied by path.

use std::path::PathBuf;

/// Returns the data directory for bookrack output.
///
/// Resolves to the platform-local data directory (for example
/// `~/.local/share/bookrack` on Linux), falling back to the current
/// directory when the platform provides none. The directory is created on
/// demand by the caller.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookrack")
}
