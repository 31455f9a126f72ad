//! Header component renderer.
//!
//! Renders the title bar with centered text, bold styling, and the active
//! palette.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is centered horizontally and the line is padded to the full
/// terminal width so the paper background covers the row. Returns the next
/// available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bg(&theme.colors.paper));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.ink));

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
