//! Settings overlay renderer.
//!
//! Renders the theme chooser as a centered bordered box with the two
//! palettes; the current choice carries a filled marker and the accent
//! color. The choice only takes effect when the form is submitted.

use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::viewmodel::SettingsView;

use super::overlay::{centered_left, render_frame, render_frame_line, Frame};

/// Preferred box width; shrinks on narrow terminals.
const BOX_WIDTH: usize = 40;

/// Renders the settings overlay.
pub fn render_settings_overlay(view: &SettingsView, theme: &Theme, cols: usize) {
    let width = BOX_WIDTH.min(cols.saturating_sub(4)).max(20);
    let left = centered_left(cols, width);
    let frame = render_frame(3, left, width, 8, theme);

    let heading = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.ink));
    render_frame_line(&frame, 0, theme, &heading, " Settings");
    render_frame_line(&frame, 1, theme, "", "");

    render_choice(&frame, 2, theme, "Day", "dark on light", view.choice == ThemeMode::Day);
    render_choice(&frame, 3, theme, "Night", "light on dark", view.choice == ThemeMode::Night);

    render_frame_line(&frame, 4, theme, "", "");
    let hint = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_frame_line(&frame, 5, theme, &hint, " Enter: apply   Esc: cancel");
}

fn render_choice(
    frame: &Frame,
    offset: usize,
    theme: &Theme,
    name: &str,
    blurb: &str,
    chosen: bool,
) {
    let marker = if chosen { "●" } else { "○" };
    let style = if chosen {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.ink)
    };
    let line = format!(" {marker} {name:<7}{blurb}");
    render_frame_line(frame, offset, theme, &style, &line);
}
