//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes discrete user
//! actions and translates them into state changes. It is the dispatch table
//! of the application: every overlay transition, form edit, search, reveal,
//! and theme change runs through [`handle_event`].
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The runtime shim maps raw key input to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event against the current mode
//! 3. State mutations occur via `AppState` methods
//! 4. A redraw flag and any side-effect actions are returned for execution
//!
//! Events that do not apply to the current mode are silently ignored: an
//! activation that cannot be traced to a catalog record, a load-more with
//! nothing remaining, a character typed outside the title field all resolve
//! to "no change" rather than an error.

use crate::domain::{Criteria, Result, ANY};
use crate::ui::theme::ThemeMode;

use super::modes::{Mode, SearchField, SearchForm, SettingsForm};
use super::{Action, AppState};

/// Discrete user actions driving the state machine.
///
/// Each variant corresponds to one interaction the UI affords. The runtime
/// shim owns the key-to-event mapping; the handler only sees these tagged
/// actions, keeping the transition logic independent of the input device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list selection down one revealed item (wraps to top).
    MoveDown,
    /// Moves the list selection up one revealed item (wraps to bottom).
    MoveUp,

    /// Opens the search overlay with a fresh form. No data change.
    OpenSearch,
    /// Closes the search overlay without searching. No data change.
    CancelSearch,
    /// Submits the search form: recomputes the result set, resets the
    /// reveal cursor, rebuilds the first page, and closes the overlay.
    SubmitSearch,

    /// Opens the settings overlay seeded with the active theme.
    OpenSettings,
    /// Closes the settings overlay without changing the theme.
    CancelSettings,
    /// Applies the theme choice and closes the settings overlay.
    SubmitSettings,

    /// Opens the detail overlay for the selected item, resolving its
    /// identifier against the full catalog. Silently ignored when the
    /// identifier resolves to nothing.
    OpenDetail,
    /// Closes the detail overlay.
    CloseDetail,

    /// Appends the next page of the current result set. Never re-filters;
    /// ignored when nothing remains.
    LoadMore,

    /// Moves search-form focus to the next field.
    FocusNextField,
    /// Moves search-form focus to the previous field.
    FocusPrevField,
    /// Appends a character to the search title field.
    Char(char),
    /// Removes the last character from the search title field.
    Backspace,
    /// Cycles the focused dropdown (or the settings theme choice) forward.
    NextOption,
    /// Cycles the focused dropdown (or the settings theme choice) backward.
    PrevOption,

    /// Requests application exit.
    Quit,
}

/// Processes an event, mutates application state, and returns what to do
/// next.
///
/// # Returns
///
/// A `(redraw, actions)` pair: whether the UI needs re-rendering, and any
/// side effects for the runtime shell to execute. Events that do not apply
/// to the current mode return `(false, [])`.
///
/// # Errors
///
/// Reserved for state mutation failures; every current transition is
/// infallible.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::MoveDown => {
            if state.mode != Mode::Browsing {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            if state.mode != Mode::Browsing {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }

        Event::OpenSearch => {
            if state.mode != Mode::Browsing {
                return Ok((false, vec![]));
            }
            tracing::debug!("opening search overlay");
            state.mode = Mode::Searching(SearchForm::default());
            Ok((true, vec![]))
        }
        Event::CancelSearch => {
            if !matches!(state.mode, Mode::Searching(_)) {
                return Ok((false, vec![]));
            }
            tracing::debug!("search cancelled");
            state.mode = Mode::Browsing;
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            let Mode::Searching(form) = &state.mode else {
                return Ok((false, vec![]));
            };
            let form = form.clone();

            let criteria = Criteria {
                title: form.title,
                genre: option_value(&state.genre_options, form.genre_index),
                author: option_value(&state.author_options, form.author_index),
            };
            tracing::debug!(
                genre = %criteria.genre,
                author = %criteria.author,
                "search submitted"
            );

            state.apply_search(&criteria);
            state.mode = Mode::Browsing;
            Ok((true, vec![]))
        }

        Event::OpenSettings => {
            if state.mode != Mode::Browsing {
                return Ok((false, vec![]));
            }
            state.mode = Mode::Settings(SettingsForm {
                choice: state.theme_mode,
            });
            Ok((true, vec![]))
        }
        Event::CancelSettings => {
            if !matches!(state.mode, Mode::Settings(_)) {
                return Ok((false, vec![]));
            }
            state.mode = Mode::Browsing;
            Ok((true, vec![]))
        }
        Event::SubmitSettings => {
            let Mode::Settings(form) = &state.mode else {
                return Ok((false, vec![]));
            };
            let choice = form.choice;
            state.apply_theme(choice);
            state.mode = Mode::Browsing;
            Ok((true, vec![]))
        }

        Event::OpenDetail => {
            if state.mode != Mode::Browsing {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_item().map(|item| item.id.clone()) else {
                tracing::debug!("no item selected");
                return Ok((false, vec![]));
            };

            // Resolution goes through the full catalog, not the result set,
            // so items revealed by earlier pages or filters still resolve.
            if state.catalog.find_book(&id).is_none() {
                tracing::debug!(book_id = %id, "selection did not resolve, ignoring");
                return Ok((false, vec![]));
            }

            tracing::debug!(book_id = %id, "opening detail overlay");
            state.mode = Mode::Detail(id);
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            if !matches!(state.mode, Mode::Detail(_)) {
                return Ok((false, vec![]));
            }
            state.mode = Mode::Browsing;
            Ok((true, vec![]))
        }

        Event::LoadMore => {
            if state.mode != Mode::Browsing {
                return Ok((false, vec![]));
            }
            Ok((state.reveal_next_page(), vec![]))
        }

        Event::FocusNextField => {
            let Mode::Searching(form) = &mut state.mode else {
                return Ok((false, vec![]));
            };
            form.focus = form.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPrevField => {
            let Mode::Searching(form) = &mut state.mode else {
                return Ok((false, vec![]));
            };
            form.focus = form.focus.prev();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let Mode::Searching(form) = &mut state.mode else {
                return Ok((false, vec![]));
            };
            if form.focus != SearchField::Title {
                return Ok((false, vec![]));
            }
            form.title.push(*c);
            tracing::trace!(title = %form.title, "title query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let Mode::Searching(form) = &mut state.mode else {
                return Ok((false, vec![]));
            };
            if form.focus != SearchField::Title {
                return Ok((false, vec![]));
            }
            form.title.pop();
            Ok((true, vec![]))
        }

        Event::NextOption | Event::PrevOption => {
            let forward = *event == Event::NextOption;
            cycle_option(state, forward)
        }

        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Cycles whichever option list the current mode exposes: the focused
/// search dropdown, or the settings theme choice.
fn cycle_option(state: &mut AppState, forward: bool) -> Result<(bool, Vec<Action>)> {
    let genre_len = state.genre_options.len();
    let author_len = state.author_options.len();

    match &mut state.mode {
        Mode::Searching(form) => match form.focus {
            SearchField::Genre => {
                form.genre_index = cycle_index(form.genre_index, genre_len, forward);
                Ok((true, vec![]))
            }
            SearchField::Author => {
                form.author_index = cycle_index(form.author_index, author_len, forward);
                Ok((true, vec![]))
            }
            SearchField::Title => Ok((false, vec![])),
        },
        Mode::Settings(form) => {
            form.choice = match form.choice {
                ThemeMode::Day => ThemeMode::Night,
                ThemeMode::Night => ThemeMode::Day,
            };
            Ok((true, vec![]))
        }
        _ => Ok((false, vec![])),
    }
}

/// Steps an index through a list of `len` options with wrap-around.
const fn cycle_index(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

/// The criteria value carried by a dropdown position, falling back to the
/// `"any"` sentinel for an out-of-range index.
fn option_value(options: &[crate::catalog::SelectOption], index: usize) -> String {
    options
        .get(index)
        .map_or_else(|| ANY.to_string(), |option| option.value.clone())
}
