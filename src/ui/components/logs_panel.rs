//! Overlay listing recent log records.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct LogsPanel {
    logger: Logger,
    scroll: u16,
}

impl LogsPanel {
    pub fn new(logger: Logger) -> Self {
        Self { logger, scroll: 0 }
    }
}

impl Component for LogsPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('L') => {
                self.scroll = 0;
                Action::ShowLogs(false)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('c') => {
                self.logger.clear();
                self.scroll = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let logs = self.logger.get_logs();
        let lines: Vec<Line> = if logs.is_empty() {
            vec![Line::from("No log records yet.")]
        } else {
            logs.into_iter().map(Line::from).collect()
        };

        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_LOGS)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        f.render_widget(Clear, rect);
        f.render_widget(panel, rect);
    }
}
