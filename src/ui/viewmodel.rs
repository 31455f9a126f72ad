//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information (resolved author names, match-highlight ranges, the load-more
//! label) with no business logic of their own.
//!
//! Display items are also the revealed-list currency: the application state
//! stores the items built for every revealed page, so a load-more appends new
//! items without touching (or re-filtering) what was already built.

use crate::app::modes::SearchField;
use crate::ui::theme::ThemeMode;

/// Complete view model for one rendered frame.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Windowed slice of the revealed items around the selection.
    pub display_items: Vec<DisplayItem>,

    /// Selection index relative to `display_items`.
    pub selected_index: usize,

    /// Header information (title, match count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints for the current mode).
    pub footer: FooterInfo,

    /// Load-more affordance: label with remaining count, enabled flag.
    pub load_more: LoadMoreInfo,

    /// Empty-result message, present iff the result set is empty.
    pub empty_state: Option<EmptyState>,

    /// The open overlay projected for rendering, if any.
    pub overlay: OverlayView,
}

/// Display information for a single revealed book.
///
/// Carries the book identifier so activation can be traced back to the
/// catalog record, and the author display name already resolved through the
/// author directory; the raw author id never reaches the visible surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Identifier of the underlying book record.
    pub id: String,

    /// Book title.
    pub title: String,

    /// Resolved author display name.
    pub author: String,

    /// Cover image reference.
    pub image: String,

    /// Character ranges of the title matching the active title filter.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Whether this item is under the selection cursor.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the current match count.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Load-more affordance state.
///
/// Enabled exactly when items remain beyond the revealed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreInfo {
    /// Control label, e.g. `"Show more (6)"`.
    pub label: String,

    /// Whether activating the control reveals anything.
    pub enabled: bool,

    /// Count of items not yet revealed.
    pub remaining: usize,
}

/// Empty-result message display information.
///
/// A first-class UI state, not an error: shown when a search matches
/// nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// The overlay to draw on top of the browse screen, if any.
#[derive(Debug, Clone)]
pub enum OverlayView {
    /// No overlay; plain browsing.
    None,
    /// Search form overlay.
    Search(SearchView),
    /// Settings overlay.
    Settings(SettingsView),
    /// Detail overlay for one book.
    Detail(DetailView),
}

/// Search overlay projection: the form fields with dropdown indices already
/// resolved to their display labels.
#[derive(Debug, Clone)]
pub struct SearchView {
    /// Title substring being typed.
    pub title: String,
    /// Display label of the selected genre option.
    pub genre_label: String,
    /// Display label of the selected author option.
    pub author_label: String,
    /// Field currently receiving input.
    pub focus: SearchField,
}

/// Settings overlay projection.
#[derive(Debug, Clone, Copy)]
pub struct SettingsView {
    /// Theme the form currently points at.
    pub choice: ThemeMode,
}

/// Detail overlay projection for one book.
///
/// One image reference serves as both the backdrop and the foreground
/// cover, so it is carried once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Cover image reference.
    pub image: String,
    /// Book title.
    pub title: String,
    /// Composed `"<author display name> (<publication year>)"` line.
    pub subtitle: String,
    /// Full description text.
    pub description: String,
}
