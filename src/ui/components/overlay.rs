//! Shared overlay frame renderer.
//!
//! Overlays (search, settings, detail) are drawn as bordered boxes on top of
//! the browse screen. This module owns the frame: border lines in the accent
//! color and an interior cleared to the paper background, so overlay content
//! renders on a clean surface regardless of what the list drew underneath.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Geometry of a rendered overlay frame.
///
/// Content rows run from `content_row` for `content_height` rows, starting
/// at `content_col` with `content_width` columns inside the borders.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub content_row: usize,
    pub content_col: usize,
    pub content_width: usize,
    pub content_height: usize,
}

/// Draws a bordered box of `width` x `height` cells with its top-left corner
/// at (`top`, `left`), clearing the interior to the paper background.
///
/// Returns the interior geometry for the caller to render content into.
pub fn render_frame(top: usize, left: usize, width: usize, height: usize, theme: &Theme) -> Frame {
    let inner_width = width.saturating_sub(2);
    let inner_height = height.saturating_sub(2);

    position_cursor(top, left);
    print!("{}", Theme::bg(&theme.colors.paper));
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("┌{}┐", "─".repeat(inner_width));

    for offset in 0..inner_height {
        position_cursor(top + 1 + offset, left);
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("│");
        print!("{}", Theme::fg(&theme.colors.ink));
        print!("{}", " ".repeat(inner_width));
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("│");
    }

    position_cursor(top + 1 + inner_height, left);
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    Frame {
        content_row: top + 1,
        content_col: left + 1,
        content_width: inner_width,
        content_height: inner_height,
    }
}

/// Left column that horizontally centers a box of `width` cells.
#[must_use]
pub const fn centered_left(cols: usize, width: usize) -> usize {
    cols.saturating_sub(width) / 2 + 1
}

/// Writes one content line inside a frame, padded to the frame width.
///
/// The paper background is re-applied for the whole line; `style` is emitted
/// before the text (color/bold sequences).
pub fn render_frame_line(frame: &Frame, offset: usize, theme: &Theme, style: &str, text: &str) {
    let clipped: String = text.chars().take(frame.content_width).collect();
    let clipped_len = clipped.chars().count();

    position_cursor(frame.content_row + offset, frame.content_col);
    print!("{}", Theme::bg(&theme.colors.paper));
    print!("{style}");
    print!("{clipped}");
    print!(
        "{}",
        " ".repeat(frame.content_width.saturating_sub(clipped_len))
    );
    print!("{}", Theme::reset());
}
