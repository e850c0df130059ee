//! Content panel widget: the selected haiku, centered.

use super::{centered_offset, panel_block, put_clipped};
use crate::domain::Haiku;
use ratatui::prelude::*;

/// Widget for the "Haiku" panel
pub struct HaikuViewWidget<'a> {
    haiku: Option<&'a Haiku>,
}

impl<'a> HaikuViewWidget<'a> {
    /// Create a new content widget. `None` draws an empty panel.
    pub fn new(haiku: Option<&'a Haiku>) -> Self {
        Self { haiku }
    }

    /// Row of the first body line, relative to the panel top
    pub fn anchor_row(panel_height: u16) -> u16 {
        (panel_height / 2).saturating_sub(2)
    }

    /// (row offset, text, style) for every line of the poem.
    ///
    /// Offsets are relative to the anchor row; the title sits above it.
    fn lines(haiku: &Haiku) -> [(i32, &str, Style); 5] {
        let title = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let accent = Style::default().fg(Color::Cyan).bg(Color::Black);
        let author = Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC);

        [
            (-2, haiku.title, title),
            (0, haiku.body[0], accent),
            (1, haiku.body[1], accent),
            (2, haiku.body[2], accent),
            (4, haiku.author, author),
        ]
    }
}

impl Widget for HaikuViewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block("Haiku");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(haiku) = self.haiku else {
            return;
        };

        let anchor = i32::from(area.y) + i32::from(Self::anchor_row(area.height));
        for (offset, text, style) in Self::lines(haiku) {
            let Ok(y) = u16::try_from(anchor + offset) else {
                continue;
            };
            let x = area.x.saturating_add(centered_offset(area.width, text));
            put_clipped(buf, inner, x, y, text, style);
        }
    }
}
