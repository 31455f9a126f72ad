//! Detail overlay renderer.
//!
//! Renders the full record for one book: title, the composed
//! author-and-year subtitle, the wrapped description, and the cover
//! reference. The overlay is a wide centered box sized to the description,
//! capped so it always fits the terminal.

use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

use super::overlay::{centered_left, render_frame, render_frame_line, Frame};

/// Preferred box width; shrinks on narrow terminals.
const BOX_WIDTH: usize = 70;

/// Renders the detail overlay.
pub fn render_detail_overlay(view: &DetailView, theme: &Theme, cols: usize, rows: usize) {
    let width = BOX_WIDTH.min(cols.saturating_sub(4)).max(24);
    let text_width = width.saturating_sub(4);

    let mut description = wrap_text(&view.description, text_width);
    let max_description_rows = rows.saturating_sub(12).max(2);
    if description.len() > max_description_rows {
        description.truncate(max_description_rows);
        if let Some(last) = description.last_mut() {
            last.push('…');
        }
    }

    // blank, title, subtitle, blank, description, blank, cover, blank
    let content_height = 7 + description.len();
    let left = centered_left(cols, width);
    let frame = render_frame(2, left, width, content_height + 2, theme);

    let mut offset = 0;
    render_frame_line(&frame, offset, theme, "", "");
    offset += 1;

    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.ink));
    render_frame_line(&frame, offset, theme, &title_style, &format!(" {}", view.title));
    offset += 1;

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_frame_line(&frame, offset, theme, &subtitle_style, &format!(" {}", view.subtitle));
    offset += 1;

    render_frame_line(&frame, offset, theme, "", "");
    offset += 1;

    let body_style = Theme::fg(&theme.colors.ink);
    for line in &description {
        render_frame_line(&frame, offset, theme, &body_style, &format!(" {line}"));
        offset += 1;
    }

    render_frame_line(&frame, offset, theme, "", "");
    offset += 1;

    render_cover_line(&frame, offset, theme, &view.image);
    offset += 1;

    render_frame_line(&frame, offset, theme, "", "");
}

fn render_cover_line(frame: &Frame, offset: usize, theme: &Theme, image: &str) {
    let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_frame_line(frame, offset, theme, &style, &format!(" Cover: {image}"));
}
