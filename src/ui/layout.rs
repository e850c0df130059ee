//! Main layout rendering for the TUI.

use crate::app::App;
use crate::ui::widgets::haiku_list::HaikuListWidget;
use crate::ui::widgets::haiku_view::HaikuViewWidget;
use ratatui::prelude::*;

/// Share of the terminal width given to the list panel, in tenths
const LIST_PANEL_TENTHS: u32 = 3;

/// The two panel rectangles derived from the terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelGeometry {
    /// Narrow left panel with the haiku titles
    pub list: Rect,
    /// Wide right panel with the selected haiku
    pub content: Rect,
}

impl PanelGeometry {
    /// Split `area` 30/70 into the list and content panels.
    ///
    /// The list panel gets `floor(width * 3 / 10)` columns, the content panel
    /// the rest. Both span the full height.
    pub fn split(area: Rect) -> Self {
        let list_width = list_panel_width(area.width);
        let list = Rect {
            width: list_width,
            ..area
        };
        let content = Rect {
            x: area.x.saturating_add(list_width),
            width: area.width - list_width,
            ..area
        };
        Self { list, content }
    }

    /// Geometry for a terminal of `width` x `height` cells
    pub fn for_size(width: u16, height: u16) -> Self {
        Self::split(Rect::new(0, 0, width, height))
    }
}

/// Width of the list panel for a terminal `width` columns wide
pub fn list_panel_width(width: u16) -> u16 {
    // Widened to avoid overflow of width * 3
    (u32::from(width) * LIST_PANEL_TENTHS / 10) as u16
}

/// Draw the main application UI into the geometry applied at the last resize
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let geometry = app.geometry();
    let geometry = PanelGeometry {
        list: geometry.list.intersection(area),
        content: geometry.content.intersection(area),
    };

    frame.render_widget(
        HaikuListWidget::new(app.haikus(), app.selected_index()),
        geometry.list,
    );
    frame.render_widget(HaikuViewWidget::new(app.selected_haiku()), geometry.content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_split_widths() {
        let geometry = PanelGeometry::for_size(100, 30);
        assert_eq!(geometry.list, Rect::new(0, 0, 30, 30));
        assert_eq!(geometry.content, Rect::new(30, 0, 70, 30));
    }

    #[test]
    fn test_split_floors_list_width() {
        let geometry = PanelGeometry::for_size(80, 24);
        assert_eq!(geometry.list.width, 24);
        assert_eq!(geometry.content.width, 56);

        let geometry = PanelGeometry::for_size(9, 24);
        assert_eq!(geometry.list.width, 2);
        assert_eq!(geometry.content.width, 7);
    }

    #[test]
    fn test_split_covers_width_without_overlap() {
        for width in 0..=u16::MAX {
            let geometry = PanelGeometry::for_size(width, 5);
            assert_eq!(geometry.list.width + geometry.content.width, width);
            assert_eq!(u32::from(geometry.list.width), u32::from(width) * 3 / 10);
            assert_eq!(geometry.content.x, geometry.list.right());
        }
    }

    #[test]
    fn test_split_zero_width() {
        let geometry = PanelGeometry::for_size(0, 24);
        assert_eq!(geometry.list.width, 0);
        assert_eq!(geometry.content.width, 0);
        assert_eq!(geometry.content.height, 24);
    }

    #[test]
    fn test_split_respects_area_origin() {
        let geometry = PanelGeometry::split(Rect::new(5, 2, 50, 10));
        assert_eq!(geometry.list, Rect::new(5, 2, 15, 10));
        assert_eq!(geometry.content, Rect::new(20, 2, 35, 10));
    }

    #[test]
    fn test_draw_both_panels() {
        let mut app = App::new();
        app.resize(80, 24);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Haiku Menu"));
        assert!(text.contains("1. Ancient Pond"));
        assert!(text.contains("The sound of water"));
        // Content panel border starts right after the list panel
        assert_eq!(buffer[(24, 0)].symbol(), "┌");
        assert_eq!(buffer[(23, 0)].symbol(), "┐");
    }

    #[test]
    fn test_draw_uses_applied_geometry() {
        let mut app = App::new();
        app.resize(100, 24);
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        assert_eq!(terminal.backend().buffer()[(30, 0)].symbol(), "┌");

        app.resize(60, 24);
        terminal.draw(|f| draw(f, &app)).unwrap();
        assert_eq!(terminal.backend().buffer()[(18, 0)].symbol(), "┌");
    }

    #[test]
    fn test_draw_clamps_stale_geometry_to_frame() {
        let mut app = App::new();
        app.resize(200, 50);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(60, 0)].symbol(), "┌");
    }
}
