//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning,
//! highlighted-span text output, and word wrapping for the detail overlay.
//! Everything here writes raw ANSI to stdout; nothing touches application
//! state.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for title matches.
///
/// Splits the text into highlighted and normal sections based on the
/// provided character ranges. Highlighting is suppressed for selected rows,
/// where the selection colors take precedence.
///
/// Ranges use character indices (inclusive start, exclusive end), matching
/// how the application state computes them.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::bg(&theme.colors.paper));
        print!("{}", Theme::fg(&theme.colors.ink));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Wraps text to the given width on word boundaries.
///
/// Words longer than the width are split hard. Used for the detail overlay
/// description.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace().flat_map(|w| chunk_word(w, width)) {
        let separator = usize::from(!current.is_empty());
        if current.chars().count() + separator + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Splits a single word into chunks no longer than `width` characters.
fn chunk_word(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chars = word.chars().peekable();
    while chars.peek().is_some() {
        chunks.push(chars.by_ref().take(width).collect());
    }
    chunks
}

/// Truncates a string to `max` characters, appending `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let prefix: String = text.chars().take(keep).collect();
    format!("{prefix}...")
}
