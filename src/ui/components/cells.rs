//! Styling of [`DisplayValue`]s for the terminal.

use crate::grid::{BadgeTone, DisplayValue};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Characters reserved after a progress bar for the " NN%" label
const PROGRESS_LABEL_WIDTH: u16 = 5;

pub fn badge_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Positive => Color::Green,
        BadgeTone::Warning => Color::Yellow,
        BadgeTone::Negative => Color::Red,
        BadgeTone::Neutral => Color::Gray,
    }
}

/// Render a cell value into a line at most `width` cells wide.
/// Text is not truncated here; the caller's rect clips it.
pub fn display_line(value: &DisplayValue, width: u16) -> Line<'static> {
    match value {
        DisplayValue::Text(text) => Line::from(text.clone()),
        DisplayValue::Emphasis(text) => {
            Line::from(Span::styled(text.clone(), Style::default().add_modifier(Modifier::BOLD)))
        }
        DisplayValue::Badge { text, tone } => Line::from(Span::styled(
            format!(" {text} "),
            Style::default().fg(Color::Black).bg(badge_color(*tone)),
        )),
        DisplayValue::Progress(percent) => progress_line(*percent, width),
        DisplayValue::Empty => Line::default(),
    }
}

fn progress_line(percent: u8, width: u16) -> Line<'static> {
    let percent = percent.min(100);
    let label = format!(" {percent}%");
    let bar_width = width.saturating_sub(PROGRESS_LABEL_WIDTH);
    if bar_width == 0 {
        return Line::from(label.trim_start().to_string());
    }

    let filled = usize::from(bar_width) * usize::from(percent) / 100;
    let empty = usize::from(bar_width) - filled;
    let color = match percent {
        80..=100 => Color::Green,
        40..=79 => Color::Blue,
        _ => Color::Yellow,
    };

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::raw(label),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fills_proportionally() {
        let line = progress_line(50, 15);
        assert_eq!(line.spans[0].content, "█████");
        assert_eq!(line.spans[1].content, "░░░░░");
        assert_eq!(line.spans[2].content, " 50%");
    }

    #[test]
    fn narrow_progress_shows_only_label() {
        let line = progress_line(7, 4);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, "7%");
    }
}
