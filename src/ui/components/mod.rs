//! Composable UI component renderers.
//!
//! One renderer per screen component, each writing only to its assigned
//! rows: header, column list, load-more control, empty-state message,
//! footer, and the three overlay boxes. The browse layout composes them
//! top to bottom; overlays draw on top of the finished browse frame.
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Column Headers]
//! [List Rows | Empty-State Message]
//! [Blank padding to fill screen]
//! [Load-More Row]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod load_more;
pub mod overlay;
mod search_form;
mod settings;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OverlayView, UiViewModel};

use detail::render_detail_overlay;
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows};
use load_more::render_load_more;
use search_form::render_search_overlay;
use settings::render_settings_overlay;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row.
fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bg(&theme.colors.paper));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Paints one row with the paper background.
fn render_blank_row(row: usize, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::bg(&theme.colors.paper));
    print!("{}", " ".repeat(cols));
    print!("{}", Theme::reset());
}

/// Renders the full browse screen: chrome, list (or empty-state message),
/// load-more row, and footer.
pub fn render_browse(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    render_blank_row(1, theme, cols);
    let mut current_row = render_header(2, &vm.header, theme, cols);
    current_row = render_border(current_row, theme, cols);
    current_row = render_list_headers(current_row, theme, cols);

    let fill_end = rows.saturating_sub(3);
    if let Some(empty) = &vm.empty_state {
        for row in current_row..=fill_end {
            render_blank_row(row, theme, cols);
        }
        render_empty_state(empty, theme, cols);
    } else {
        current_row = render_list_rows(current_row, &vm.display_items, theme, cols);
        for row in current_row..=fill_end {
            render_blank_row(row, theme, cols);
        }
    }

    render_load_more(rows.saturating_sub(2), &vm.load_more, theme, cols);
    render_border(rows.saturating_sub(1), theme, cols);
    render_footer(rows, &vm.footer, theme, cols);
}

/// Renders the open overlay, if any, on top of the browse screen.
pub fn render_overlay_view(overlay: &OverlayView, theme: &Theme, cols: usize, rows: usize) {
    match overlay {
        OverlayView::None => {}
        OverlayView::Search(view) => render_search_overlay(view, theme, cols),
        OverlayView::Settings(view) => render_settings_overlay(view, theme, cols),
        OverlayView::Detail(view) => render_detail_overlay(view, theme, cols, rows),
    }
}
