//! Bookrack: a terminal browser for a bundled book catalog.
//!
//! Bookrack renders a browsable, filterable catalog of book records in the
//! terminal, with:
//! - Title/genre/author filtering via a search overlay
//! - Paginated "show more" reveal of the current result set
//! - A detail overlay for the selected book
//! - A day/night theme toggle with symmetric palettes
//!
//! Everything operates on a static catalog embedded at compile time; there
//! is no network I/O, no persistence, and no background work.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime Shell (main.rs, terminal.rs)               │  ← Event loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and mode transitions              │
//! │  - Pagination state                                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │
//! │ (ui/)         │   │ (catalog/)    │
//! │ - Rendering   │   │ - Bundled data│
//! │ - Theming     │   │ - Directories │
//! │ - Components  │   │ - Options     │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure Layers                     │
//! │  - Book model and filter engine (domain/)           │
//! │  - Error types (domain/error)                       │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! A search submission recomputes the result set through the filter engine,
//! resets the pagination cursor, and rebuilds the first revealed page. A
//! load-more appends the next page of the already-computed result set;
//! filtering never re-runs between searches. Rendering is a pure projection
//! of state into view models and then ANSI output.
//!
//! # Example
//!
//! ```
//! use bookrack::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (redraw, _actions) = handle_event(&mut state, &Event::MoveDown)?;
//! assert!(redraw);
//! # Ok::<(), bookrack::BookrackError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod terminal;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Mode, Pager, SearchField};
pub use catalog::Catalog;
pub use domain::{filter_books, Book, BookrackError, Criteria, Result, ANY};
pub use ui::{Theme, ThemeMode};

/// Runtime configuration assembled from the command line.
///
/// Everything is optional; the defaults are ambient theme detection, the
/// built-in palettes, and `info`-level logging.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Initial theme (`"day"` or `"night"`), overriding ambient detection.
    pub theme: Option<String>,

    /// Path to a custom TOML palette, taking precedence over `theme` for
    /// the initial palette. The in-app toggle still switches between the
    /// built-in day/night palettes afterwards.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for log output (e.g. `"debug"`,
    /// `"bookrack=trace"`). Default: `"info"`.
    pub log_level: Option<String>,
}

/// Initializes the application state.
///
/// Loads the bundled catalog, derives the startup theme (explicit config
/// first, then the ambient environment preference, then the day default)
/// and builds the initial state: the result set is the full catalog, the
/// reveal cursor is on page 1, and the first page plus the dropdown option
/// lists are ready to render.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookrack");

    let theme_mode = config
        .theme
        .as_deref()
        .and_then(ThemeMode::parse)
        .unwrap_or_else(ThemeMode::detect_ambient);

    let theme = config.theme_file.as_ref().map_or_else(
        || Theme::for_mode(theme_mode),
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using built-in");
                Theme::for_mode(theme_mode)
            })
        },
    );

    let catalog = Catalog::bundled();
    tracing::debug!(
        books = catalog.books.len(),
        authors = catalog.authors.len(),
        genres = catalog.genres.len(),
        page_size = catalog.page_size,
        theme = %theme_mode.as_str(),
        "catalog loaded"
    );

    AppState::new(catalog, theme_mode, theme)
}
