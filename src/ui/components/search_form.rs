//! Search overlay renderer.
//!
//! Renders the search form as a centered bordered box with three fields:
//! free-text title, genre dropdown, and author dropdown. The focused field is
//! marked and drawn in the accent color; dropdown fields show cycling arrows
//! when focused.

use crate::app::modes::SearchField;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchView;

use super::overlay::{centered_left, render_frame, render_frame_line, Frame};

/// Preferred box width; shrinks on narrow terminals.
const BOX_WIDTH: usize = 58;

/// Renders the search overlay.
pub fn render_search_overlay(view: &SearchView, theme: &Theme, cols: usize) {
    let width = BOX_WIDTH.min(cols.saturating_sub(4)).max(20);
    let left = centered_left(cols, width);
    let frame = render_frame(3, left, width, 9, theme);

    let heading = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.ink));
    render_frame_line(&frame, 0, theme, &heading, " Search");
    render_frame_line(&frame, 1, theme, "", "");

    render_text_field(
        &frame,
        2,
        theme,
        "Title",
        &view.title,
        view.focus == SearchField::Title,
    );
    render_dropdown_field(
        &frame,
        3,
        theme,
        "Genre",
        &view.genre_label,
        view.focus == SearchField::Genre,
    );
    render_dropdown_field(
        &frame,
        4,
        theme,
        "Author",
        &view.author_label,
        view.focus == SearchField::Author,
    );

    render_frame_line(&frame, 5, theme, "", "");
    let hint = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_frame_line(&frame, 6, theme, &hint, " Enter: search   Esc: cancel");
}

fn render_text_field(
    frame: &Frame,
    offset: usize,
    theme: &Theme,
    label: &str,
    value: &str,
    focused: bool,
) {
    let marker = if focused { "› " } else { "  " };
    let cursor = if focused { "_" } else { "" };
    let style = field_style(theme, focused);
    let line = format!("{marker}{label:<8}{value}{cursor}");
    render_frame_line(frame, offset, theme, &style, &line);
}

fn render_dropdown_field(
    frame: &Frame,
    offset: usize,
    theme: &Theme,
    label: &str,
    value: &str,
    focused: bool,
) {
    let marker = if focused { "› " } else { "  " };
    let style = field_style(theme, focused);
    let line = if focused {
        format!("{marker}{label:<8}‹ {value} ›")
    } else {
        format!("{marker}{label:<8}{value}")
    };
    render_frame_line(frame, offset, theme, &style, &line);
}

fn field_style(theme: &Theme, focused: bool) -> String {
    if focused {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.ink)
    }
}
