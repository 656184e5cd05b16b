//! Status bar component

use crate::constants::{HINT_DRAG, HINT_KEYS, HINT_RESIZE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the footer reports about the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub records: usize,
    pub selected: usize,
    /// Label of the column being dragged, and of the column under it
    pub dragging: Option<(String, Option<String>)>,
    /// Label of the column being resized
    pub resizing: Option<String>,
}

impl StatusInfo {
    pub fn text(&self) -> String {
        if let Some((moved, over)) = &self.dragging {
            return match over {
                Some(target) if target != moved => format!("Moving '{moved}' onto '{target}' • Enter/release: drop • Esc: cancel"),
                _ => format!("Moving '{moved}' • Esc: cancel"),
            };
        }
        if let Some(column) = &self.resizing {
            return format!("Resizing '{column}'");
        }

        let records = format!("Showing {} records", self.records);
        if self.selected > 0 {
            format!("{records} ({} selected) • {HINT_KEYS}", self.selected)
        } else {
            format!("{records} • {HINT_DRAG} • {HINT_RESIZE} • {HINT_KEYS}")
        }
    }
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo) {
        let color = if info.dragging.is_some() || info.resizing.is_some() {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(Line::from(Span::raw(info.text())))
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
