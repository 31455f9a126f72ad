//! Load-more control renderer.
//!
//! Renders the "Show more (N)" affordance below the list. The control is
//! enabled exactly when unrevealed items remain; when the remainder reaches
//! zero it renders disabled and the key hint disappears.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoadMoreInfo;

/// Renders the load-more row at the specified row.
///
/// Returns the next available row.
pub fn render_load_more(row: usize, info: &LoadMoreInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bg(&theme.colors.paper));

    let line = if info.enabled {
        print!("{}", Theme::fg(&theme.colors.accent));
        format!("  [m] {}", info.label)
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        format!("      {}", info.label)
    };

    let line_len = line.chars().count();
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}
