//! Scrollbar for the grid body.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the area split it needs.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// `offset` is the first visible row, `viewport` the number of rows shown
    pub fn update_state(&mut self, total_rows: usize, offset: usize, viewport: usize) {
        self.state = self
            .state
            .content_length(total_rows.saturating_sub(viewport))
            .position(offset)
            .viewport_content_length(viewport);
    }

    pub fn needs_scrollbar(total_rows: usize, viewport: usize) -> bool {
        total_rows > viewport
    }

    /// Split `body` into the row area and, when rows overflow, a one-column
    /// scrollbar on the right.
    pub fn calculate_areas(body: Rect, total_rows: usize) -> (Rect, Option<Rect>) {
        if !Self::needs_scrollbar(total_rows, usize::from(body.height)) || body.width < 2 {
            return (body, None);
        }
        let content = Rect {
            width: body.width - 1,
            ..body
        };
        let scrollbar = Rect {
            x: body.right() - 1,
            width: 1,
            ..body
        };
        (content, Some(scrollbar))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
