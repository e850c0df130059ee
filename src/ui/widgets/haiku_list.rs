//! List panel widget: numbered haiku titles with the selection highlighted.

use super::{panel_block, put_clipped};
use crate::domain::Haiku;
use ratatui::prelude::*;

/// Help lines drawn at the bottom of the list panel
pub const HELP_FOOTER: [&str; 2] = ["up/down: Navigate", "q: Quit"];

/// First item row, relative to the panel top
const FIRST_ROW: u16 = 2;
/// Rows between consecutive items
const ROW_STRIDE: u16 = 2;
/// Item indentation, relative to the panel left edge
const INDENT: u16 = 2;

/// Widget for the "Haiku Menu" panel
pub struct HaikuListWidget<'a> {
    haikus: &'a [Haiku],
    selected_index: usize,
}

impl<'a> HaikuListWidget<'a> {
    /// Create a new list widget
    pub fn new(haikus: &'a [Haiku], selected_index: usize) -> Self {
        Self {
            haikus,
            selected_index,
        }
    }

    fn item_style(&self, idx: usize) -> Style {
        if idx == self.selected_index {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

impl Widget for HaikuListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block("Haiku Menu");
        let inner = block.inner(area);
        block.render(area, buf);

        let footer_top = inner.bottom().saturating_sub(HELP_FOOTER.len() as u16);
        // Items never share a row with the footer
        let items_area = Rect {
            height: footer_top.saturating_sub(inner.y).min(inner.height),
            ..inner
        };

        let x = area.x.saturating_add(INDENT);
        for (idx, haiku) in self.haikus.iter().enumerate() {
            let Ok(offset) = u16::try_from(idx) else {
                break;
            };
            let y = area
                .y
                .saturating_add(FIRST_ROW)
                .saturating_add(offset.saturating_mul(ROW_STRIDE));
            let label = haiku.menu_label(idx + 1);
            put_clipped(buf, items_area, x, y, &label, self.item_style(idx));
        }

        let dim = Style::default().add_modifier(Modifier::DIM);
        for (row, text) in (footer_top..).zip(HELP_FOOTER) {
            put_clipped(buf, inner, x, row, text, dim);
        }
    }
}
