//! Toolbar above the grid.
//!
//! A single component that switches between the workspace header and the
//! bulk-action bar depending on the selection size, so nothing around it
//! gets rebuilt when the selection changes.

use crate::constants::{LABEL_RESET_LAYOUT, SUBTITLE_WORKSPACE, TITLE_WORKSPACE};
use crate::grid::ToolbarMode;
use crate::icons::{IconService, IconTheme};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

struct Button {
    area: Rect,
    action: Action,
}

pub struct GridToolbar {
    mode: ToolbarMode,
    icons: IconService,
    buttons: Vec<Button>,
}

impl GridToolbar {
    pub fn new(theme: IconTheme) -> Self {
        Self {
            mode: ToolbarMode::Default,
            icons: IconService::new(theme),
            buttons: Vec::new(),
        }
    }

    pub fn mode(&self) -> ToolbarMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ToolbarMode) {
        self.mode = mode;
    }

    pub fn set_icon_theme(&mut self, theme: IconTheme) {
        self.icons.set_theme(theme);
    }

    fn button_specs(&self) -> Vec<(String, Color, Action)> {
        match self.mode {
            ToolbarMode::Default => vec![(
                format!("[{} {}]", self.icons.reset(), LABEL_RESET_LAYOUT),
                Color::Gray,
                Action::ResetLayout,
            )],
            ToolbarMode::BulkActions { .. } => vec![
                (format!("[{} Edit]", self.icons.edit()), Color::Blue, Action::EditSelected),
                (format!("[{} Delete]", self.icons.delete()), Color::Red, Action::DeleteSelected),
                ("[Clear]".to_string(), Color::Gray, Action::ClearSelection),
            ],
        }
    }

    fn title_line(&self) -> Line<'static> {
        match self.mode {
            ToolbarMode::Default => Line::from(vec![
                Span::styled(TITLE_WORKSPACE, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(SUBTITLE_WORKSPACE, Style::default().fg(Color::DarkGray)),
            ]),
            ToolbarMode::BulkActions { count } => Line::from(Span::styled(
                format!("{count} selected"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        }
    }
}

impl Component for GridToolbar {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let at = Position::new(mouse.column, mouse.row);
        self.buttons
            .iter()
            .find(|button| button.area.contains(at))
            .map_or(Action::None, |button| button.action.clone())
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border = match self.mode {
            ToolbarMode::Default => Color::Gray,
            ToolbarMode::BulkActions { .. } => Color::Cyan,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.buttons.clear();
        if inner.height == 0 {
            return;
        }
        let line_area = Rect { height: 1, ..inner };

        // Buttons are laid out from the right edge
        let mut right = line_area.right();
        let mut placed = Vec::new();
        for (label, color, action) in self.button_specs().into_iter().rev() {
            let width = u16::try_from(Span::raw(label.as_str()).width()).unwrap_or(u16::MAX);
            let Some(x) = right.checked_sub(width) else { break };
            if x < line_area.x {
                break;
            }
            let area = Rect::new(x, line_area.y, width, 1);
            f.render_widget(Paragraph::new(label).style(Style::default().fg(color)), area);
            placed.push(Button { area, action });
            right = x.saturating_sub(1);
        }
        placed.reverse();
        self.buttons = placed;

        let title_area = Rect {
            width: right.saturating_sub(line_area.x),
            ..line_area
        };
        f.render_widget(Paragraph::new(self.title_line()), title_area);
    }
}
