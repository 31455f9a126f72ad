//! Interaction mode state types for the application.
//!
//! This module defines the state machine over which the browser operates.
//! Browsing is the rest state; the three overlay modes (search, settings,
//! detail) are mutually exclusive and each carries the transient state of its
//! overlay: form fields for search and settings, the resolved book
//! identifier for detail. Closing an overlay discards that state.

use crate::ui::theme::ThemeMode;

/// Which search-form field currently receives input.
///
/// The title field accepts free text; the genre and author fields cycle
/// through their dropdown options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Free-text title substring input.
    Title,
    /// Genre dropdown (leading `"any"` sentinel, then every genre).
    Genre,
    /// Author dropdown (leading `"any"` sentinel, then every author).
    Author,
}

impl SearchField {
    /// The field after this one, wrapping Title → Genre → Author → Title.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Author,
            Self::Author => Self::Title,
        }
    }

    /// The field before this one, wrapping in the opposite direction.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Genre => Self::Title,
            Self::Author => Self::Genre,
        }
    }
}

/// Transient state of the search overlay form.
///
/// Created fresh when the overlay opens and discarded when it closes; the
/// filter criteria are built from it on submission. The dropdown fields are
/// indices into the option lists held by the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    /// Title substring being typed.
    pub title: String,
    /// Selected index into the genre option list (0 = the `"any"` sentinel).
    pub genre_index: usize,
    /// Selected index into the author option list (0 = the `"any"` sentinel).
    pub author_index: usize,
    /// Field currently receiving input.
    pub focus: SearchField,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre_index: 0,
            author_index: 0,
            focus: SearchField::Title,
        }
    }
}

/// Transient state of the settings overlay form.
///
/// Holds the theme choice being edited; the choice only takes effect on
/// submission, so cancelling leaves the active theme untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsForm {
    /// Theme the form currently points at.
    pub choice: ThemeMode,
}

/// Current interaction mode.
///
/// All overlay modes are mutually exclusive; Browsing underlies every
/// transition. The mode determines which keybindings are live and which
/// overlay the renderer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Rest state: no overlay open, list navigation active.
    Browsing,

    /// Search overlay open, form in edit.
    Searching(SearchForm),

    /// Settings overlay open, theme choice in edit.
    Settings(SettingsForm),

    /// Detail overlay open for the book with the carried identifier.
    ///
    /// The identifier is resolved against the full catalog before entering
    /// this mode, so it always names an existing record.
    Detail(String),
}

impl Mode {
    /// Whether any overlay is currently open.
    #[must_use]
    pub const fn overlay_open(&self) -> bool {
        !matches!(self, Self::Browsing)
    }
}
