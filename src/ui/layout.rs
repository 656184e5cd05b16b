//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the leading row checkbox column, in cells
pub const CHECKBOX_COLUMN_WIDTH: u16 = 4;

/// Screen areas of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub toolbar: Rect,
    pub toggle_bar: Rect,
    pub grid: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Toolbar on top, column chips below it, the grid, and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        MainAreas {
            toolbar: chunks[0],
            toggle_bar: chunks[1],
            grid: chunks[2],
            status: chunks[3],
        }
    }

    /// Terminal cells needed to draw `width_px`, never zero
    #[must_use]
    pub fn px_to_cells(width_px: u32, cell_width_px: u32) -> u16 {
        let cell = cell_width_px.max(1);
        u16::try_from(width_px.div_ceil(cell)).unwrap_or(u16::MAX).max(1)
    }

    /// Lay `widths` out left to right from `x`, clipped to `area`.
    /// Columns that start past the right edge get no rect.
    #[must_use]
    pub fn column_rects(area: Rect, x: u16, widths: &[u16]) -> Vec<Option<Rect>> {
        let right = area.right();
        let mut cursor = x;
        widths
            .iter()
            .map(|&width| {
                if cursor >= right {
                    return None;
                }
                let clipped = width.min(right - cursor);
                let rect = Rect::new(cursor, area.y, clipped, area.height);
                cursor = cursor.saturating_add(width);
                Some(rect)
            })
            .collect()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
