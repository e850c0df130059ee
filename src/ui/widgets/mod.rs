//! Reusable UI widgets for maiku.

pub mod haiku_list;
pub mod haiku_view;

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal columns
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Left offset that centers `text` in a span of `width` columns.
///
/// Saturates at zero when the text is wider than the span.
pub fn centered_offset(width: u16, text: &str) -> u16 {
    width.saturating_sub(text_width(text)) / 2
}

/// Write `text` at (x, y), clipped to `bounds`.
///
/// Rows outside `bounds` are skipped, a start column left of `bounds` is
/// pulled in to its left edge, and the text is truncated at its right edge.
pub(crate) fn put_clipped(
    buf: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if y < bounds.top() || y >= bounds.bottom() {
        return;
    }
    let x = x.max(bounds.left());
    if x >= bounds.right() {
        return;
    }
    let max_width = usize::from(bounds.right() - x);
    buf.set_stringn(x, y, text, max_width, style);
}

/// Bordered panel with a bold title centered in the top border
pub(crate) fn panel_block(title: &str) -> ratatui::widgets::Block<'_> {
    ratatui::widgets::Block::default()
        .borders(ratatui::widgets::Borders::ALL)
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
}
