//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with an `EnvFilter` built from the
//! configured level and a formatting layer writing to
//! `<data dir>/bookrack.log`. The terminal belongs to the renderer, so
//! nothing is ever logged to stdout or stderr while the UI runs.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::paths::get_data_dir;
use crate::Config;

/// Initializes the tracing subscriber with file output.
///
/// # Level Resolution
///
/// The filter directive comes from `config.log_level`, defaulting to
/// `"info"`. Any valid `EnvFilter` directive string works (for example
/// `"debug"` or `"bookrack=trace"`).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently disables logging if the directory or file cannot be created
/// - Idempotent: safe to call multiple times, only the first call takes
///   effect
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join("bookrack.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(log_path) else {
        return;
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer);

    let _ = subscriber.try_init();
}
