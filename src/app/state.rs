//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! browser, along with the methods that replace or extend the revealed item
//! list and compute the renderable view model. It is the single source of
//! truth for the current result set and the current reveal position.
//!
//! # Architecture
//!
//! `AppState` separates the static catalog from derived state (the result
//! set, the revealed display items, the selection) to keep state transitions
//! simple. The result set is replaced wholesale on each search; the revealed
//! list is either rebuilt from the first page (search) or extended by one
//! page (load-more) and is never re-filtered in between. View models are
//! computed on demand from state snapshots.
//!
//! # State Components
//!
//! - **Catalog**: the immutable bundled book collection and directories
//! - **Matches**: the ordered subset matching the most recent criteria
//! - **Pager**: how many pages of the matches have been revealed
//! - **Revealed**: display items built for the revealed prefix of the matches
//! - **Selection**: cursor position within the revealed items
//! - **Mode**: which overlay (if any) is open, with its transient form state
//! - **Theme**: the active palette and its day/night mode

use crate::catalog::{Catalog, SelectOption};
use crate::domain::{filter_books, Criteria};
use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, LoadMoreInfo, OverlayView, SearchView,
    SettingsView, UiViewModel,
};

use super::modes::Mode;
use super::pager::Pager;

/// Central application state container.
///
/// Mutated only by the event handler in response to user input. The catalog
/// and option lists are fixed after construction; everything else is derived
/// UI state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The full static catalog, directories, and page size.
    pub catalog: Catalog,

    /// Books matching the most recent filter criteria, in catalog order.
    ///
    /// Replaced wholesale by [`AppState::apply_search`]; never mutated in
    /// place. Initialized to the full catalog.
    pub matches: Vec<crate::domain::Book>,

    /// Reveal cursor over `matches`.
    pub pager: Pager,

    /// Display items built for the revealed prefix of `matches`.
    ///
    /// Rebuilt from the first page on search, extended by one page on
    /// load-more. Its length always equals the pager's revealed count.
    pub revealed: Vec<DisplayItem>,

    /// Zero-based selection index within `revealed`.
    pub selected_index: usize,

    /// Current interaction mode and overlay state.
    pub mode: Mode,

    /// Day/night mode of the active theme.
    pub theme_mode: ThemeMode,

    /// Active color palette.
    pub theme: Theme,

    /// Trimmed title constraint of the most recent search, used to compute
    /// match-highlight ranges on newly built display items.
    pub active_title_query: String,

    /// Genre dropdown options, `"any"` sentinel first.
    pub genre_options: Vec<SelectOption>,

    /// Author dropdown options, `"any"` sentinel first.
    pub author_options: Vec<SelectOption>,
}

impl AppState {
    /// Creates the startup state: the result set is the full catalog, the
    /// cursor is on page 1, the first page of display items is built, and
    /// the dropdown option lists are derived from the directories.
    #[must_use]
    pub fn new(catalog: Catalog, theme_mode: ThemeMode, theme: Theme) -> Self {
        let genre_options = catalog.genre_options();
        let author_options = catalog.author_options();
        let matches = catalog.books.clone();
        let pager = Pager::new(catalog.page_size);

        let mut state = Self {
            catalog,
            matches,
            pager,
            revealed: Vec::new(),
            selected_index: 0,
            mode: Mode::Browsing,
            theme_mode,
            theme,
            active_title_query: String::new(),
            genre_options,
            author_options,
        };
        state.rebuild_revealed();
        state
    }

    /// Moves the selection down one revealed item, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.revealed.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.revealed.len();
    }

    /// Moves the selection up one revealed item, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.revealed.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.revealed.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The display item under the selection cursor, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&DisplayItem> {
        self.revealed.get(self.selected_index)
    }

    /// Replaces the result set with the books matching `criteria`.
    ///
    /// Resets the reveal cursor to page 1, returns the selection to the
    /// origin, and rebuilds the revealed list with exactly the first page:
    /// a full replace, never an append. Load-more afterwards only extends
    /// the list; it never re-runs this computation.
    pub fn apply_search(&mut self, criteria: &Criteria) {
        let _span = tracing::debug_span!(
            "apply_search",
            catalog_books = self.catalog.books.len(),
            title_len = criteria.title.len(),
        )
        .entered();

        self.matches = filter_books(&self.catalog.books, criteria);
        self.active_title_query = criteria.title.trim().to_string();
        self.pager.reset();
        self.selected_index = 0;
        self.rebuild_revealed();

        tracing::debug!(
            matched = self.matches.len(),
            revealed = self.revealed.len(),
            "search applied"
        );
    }

    /// Appends the next page of the current result set to the revealed list
    /// and advances the cursor.
    ///
    /// Returns `false` (leaving everything untouched) when nothing remains,
    /// which is also the condition under which the load-more control renders
    /// disabled.
    pub fn reveal_next_page(&mut self) -> bool {
        if self.pager.remaining(self.matches.len()) == 0 {
            tracing::debug!("load-more ignored, nothing remaining");
            return false;
        }

        let items: Vec<DisplayItem> = self
            .pager
            .next_slice(&self.matches)
            .iter()
            .map(|book| self.build_display_item(book))
            .collect();
        self.revealed.extend(items);
        self.pager.advance();

        tracing::debug!(
            page = self.pager.page(),
            revealed = self.revealed.len(),
            remaining = self.pager.remaining(self.matches.len()),
            "next page revealed"
        );
        true
    }

    /// Applies a theme choice from the settings form.
    ///
    /// Idempotent: applying the active mode again reloads the same palette.
    pub fn apply_theme(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.theme = Theme::for_mode(mode);
        tracing::debug!(theme = %mode.as_str(), "theme applied");
    }

    /// Rebuilds the revealed list with the currently visible prefix of the
    /// matches (after a reset, exactly the first page).
    fn rebuild_revealed(&mut self) {
        self.revealed = self
            .pager
            .visible_slice(&self.matches)
            .iter()
            .map(|book| self.build_display_item(book))
            .collect();
    }

    /// Builds the display item for one book: the resolved author display
    /// name (never the raw id), the cover reference, and highlight ranges
    /// for the active title constraint.
    fn build_display_item(&self, book: &crate::domain::Book) -> DisplayItem {
        let author = self
            .catalog
            .author_name(&book.author)
            .unwrap_or("Unknown Author")
            .to_string();

        DisplayItem {
            id: book.id.clone(),
            title: book.title.clone(),
            author,
            image: book.image.clone(),
            highlight_ranges: match_ranges(&book.title, &self.active_title_query),
            is_selected: false,
        }
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    ///
    /// Windows the revealed items around the selection so the cursor stays
    /// visible, derives the load-more affordance from the pager, raises the
    /// empty state iff the result set is empty, and projects the open
    /// overlay (if any) into its view.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UiViewModel {
        let available = Self::list_rows_available(rows);

        let mut visible_start = self.selected_index.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(self.revealed.len());
        if visible_end - visible_start < available && self.revealed.len() >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        let display_items: Vec<DisplayItem> = self.revealed[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let mut item = item.clone();
                item.is_selected = visible_start + relative_idx == self.selected_index;
                item
            })
            .collect();

        UiViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            load_more: self.compute_load_more(),
            empty_state: self.compute_empty_state(),
            overlay: self.compute_overlay(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Book Catalog ({}) ", self.matches.len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.mode {
            Mode::Browsing => {
                "j/k: navigate  Enter: details  m: show more  /: search  s: settings  q: quit"
            }
            Mode::Searching(_) => "Tab: next field  Left/Right: change option  Enter: search  Esc: cancel",
            Mode::Settings(_) => "j/k: choose theme  Enter: apply  Esc: cancel",
            Mode::Detail(_) => "Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Derives the load-more affordance: the remaining count in the label,
    /// disabled exactly when the remainder is zero.
    fn compute_load_more(&self) -> LoadMoreInfo {
        let remaining = self.pager.remaining(self.matches.len());
        LoadMoreInfo {
            label: format!("Show more ({remaining})"),
            enabled: remaining > 0,
            remaining,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.matches.is_empty() {
            Some(EmptyState {
                message: "No results found. Your filters might be too narrow.".to_string(),
                subtitle: "Press / to adjust your search.".to_string(),
            })
        } else {
            None
        }
    }

    fn compute_overlay(&self) -> OverlayView {
        match &self.mode {
            Mode::Browsing => OverlayView::None,
            Mode::Searching(form) => OverlayView::Search(SearchView {
                title: form.title.clone(),
                genre_label: self.option_label(&self.genre_options, form.genre_index),
                author_label: self.option_label(&self.author_options, form.author_index),
                focus: form.focus,
            }),
            Mode::Settings(form) => OverlayView::Settings(SettingsView {
                choice: form.choice,
            }),
            Mode::Detail(id) => self
                .catalog
                .find_book(id)
                .map_or(OverlayView::None, |book| {
                    OverlayView::Detail(self.detail_view(book))
                }),
        }
    }

    /// Projects one book into the detail overlay fields: the cover
    /// reference, the title, the `"<author> (<year>)"` subtitle, and the
    /// description.
    fn detail_view(&self, book: &crate::domain::Book) -> crate::ui::viewmodel::DetailView {
        let author = self
            .catalog
            .author_name(&book.author)
            .unwrap_or("Unknown Author");
        crate::ui::viewmodel::DetailView {
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{author} ({})", book.publication_year()),
            description: book.description.clone(),
        }
    }

    fn option_label(&self, options: &[SelectOption], index: usize) -> String {
        options
            .get(index)
            .map_or_else(|| "All".to_string(), |option| option.label.clone())
    }

    /// Rows available for list items after subtracting UI chrome: the blank
    /// top line, header, top border, column header, load-more row, bottom
    /// border, and footer.
    const fn list_rows_available(total_rows: usize) -> usize {
        total_rows.saturating_sub(7)
    }
}

/// Character-index ranges of the case-insensitive occurrences of `query`
/// within `title`, non-overlapping, left to right.
///
/// Case folding is per-character, which keeps indices aligned between the
/// folded and unfolded text.
fn match_ranges(title: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = title.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::match_ranges;

    #[test]
    fn match_ranges_finds_case_insensitive_occurrences() {
        assert_eq!(match_ranges("The Sea, The Sea", "the"), vec![(0, 3), (9, 12)]);
    }

    #[test]
    fn match_ranges_empty_query_yields_nothing() {
        assert_eq!(match_ranges("Anything", ""), Vec::<(usize, usize)>::new());
        assert_eq!(match_ranges("Anything", "   "), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn match_ranges_does_not_overlap() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }
}
