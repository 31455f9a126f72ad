//! Empty-state component renderer.
//!
//! Renders the "no matches" message shown when the current filter produced
//! an empty result set. This is a first-class display state, not an error.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty-result message as a centered two-line block.
///
/// The message uses the `empty_state_fg` theme color and the subtitle is
/// dimmed. Both lines are padded to the full terminal width. Drawn inside
/// the list region, a couple of rows below its top.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = empty.message.chars().count();
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(7, 1);
    print!("{}", Theme::bg(&theme.colors.paper));
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(8, 1);
    print!("{}", Theme::bg(&theme.colors.paper));
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
