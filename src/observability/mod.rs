//! Tracing-based observability with file output.
//!
//! Log output is the one place the renderer's ownership of stdout matters:
//! every span and event goes to a log file under the platform data
//! directory, never to the terminal the UI is drawing on. Logging is
//! strictly optional: any failure to set it up silently disables it.

pub mod init;

pub use init::init_tracing;
