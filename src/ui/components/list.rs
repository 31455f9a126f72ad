//! Book list component renderer.
//!
//! Renders the revealed books as a two-column table with TITLE and AUTHOR
//! columns, selection highlighting, and title match highlighting for the
//! active filter.

use crate::ui::helpers::{self, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the TITLE column, including the gap before AUTHOR.
const TITLE_COLUMN_WIDTH: usize = 46;

/// Longest title rendered before truncation.
const TITLE_MAX: usize = 44;

/// Renders the column headers at the specified row.
///
/// Returns the next available row.
pub fn render_list_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bg(&theme.colors.paper));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.ink));
    let line = format!("{:<width$}{}", "TITLE", "AUTHOR", width = TITLE_COLUMN_WIDTH);
    let line_len = line.chars().count();
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all visible list rows starting at the specified row.
///
/// Returns the next available row.
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single book row.
///
/// The selected row is drawn inverse (paper on ink); unselected rows are ink
/// on paper with match highlighting applied to the title. The row is padded
/// to the full terminal width so the background covers the line.
fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.paper));
        print!("{}", Theme::bg(&theme.colors.ink));
    } else {
        print!("{}", Theme::fg(&theme.colors.ink));
        print!("{}", Theme::bg(&theme.colors.paper));
    }

    let title = truncate(&item.title, TITLE_MAX);
    if item.highlight_ranges.is_empty() || item.is_selected {
        print!("{title}");
    } else {
        helpers::render_highlighted_text(&title, &item.highlight_ranges, theme, item.is_selected);
    }

    let title_len = title.chars().count();
    print!(
        "{}",
        " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len))
    );

    let author_width = cols.saturating_sub(TITLE_COLUMN_WIDTH);
    let author = truncate(&item.author, author_width);
    let author_len = author.chars().count();
    print!("{author}");
    print!(
        "{}",
        " ".repeat(author_width.saturating_sub(author_len))
    );

    print!("{}", Theme::reset());
    row + 1
}
