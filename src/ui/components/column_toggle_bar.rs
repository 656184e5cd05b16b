//! Row of visibility chips, one per hideable column.

use crate::constants::LABEL_TOGGLE_COLUMNS;
use crate::grid::ColumnLayout;
use crate::icons::{IconService, IconTheme};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnChip {
    pub id: String,
    pub label: String,
    pub visible: bool,
}

pub struct ColumnToggleBar {
    chips: Vec<ColumnChip>,
    chip_areas: Vec<(Rect, String)>,
    icons: IconService,
}

impl ColumnToggleBar {
    pub fn new(theme: IconTheme) -> Self {
        Self {
            chips: Vec::new(),
            chip_areas: Vec::new(),
            icons: IconService::new(theme),
        }
    }

    pub fn set_icon_theme(&mut self, theme: IconTheme) {
        self.icons.set_theme(theme);
    }

    pub fn chips(&self) -> &[ColumnChip] {
        &self.chips
    }

    /// Refresh chips from the layout, in its current order
    pub fn sync(&mut self, layout: &ColumnLayout) {
        self.chips = layout
            .order()
            .iter()
            .filter(|id| layout.registry().is_movable(id))
            .map(|id| ColumnChip {
                id: id.clone(),
                label: humanize_id(id),
                visible: layout.is_visible(id),
            })
            .collect();
    }
}

/// `lastLogin` -> `Last Login`, `status` -> `Status`
pub fn humanize_id(id: &str) -> String {
    let mut label = String::with_capacity(id.len() + 4);
    for (i, ch) in id.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch == '_' || ch == '-' {
            label.push(' ');
        } else if ch.is_uppercase() && !label.ends_with(' ') {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

impl Component for ColumnToggleBar {
    /// Digits 1-9 toggle the chip at that position
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let KeyCode::Char(ch) = key.code else {
            return Action::None;
        };
        ch.to_digit(10)
            .filter(|digit| *digit > 0)
            .and_then(|digit| self.chips.get(digit as usize - 1))
            .map_or(Action::None, |chip| Action::ToggleColumn(chip.id.clone()))
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let at = Position::new(mouse.column, mouse.row);
        self.chip_areas
            .iter()
            .find(|(area, _)| area.contains(at))
            .map_or(Action::None, |(_, id)| Action::ToggleColumn(id.clone()))
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.chip_areas.clear();

        let prefix = format!("{} {} ", self.icons.settings(), LABEL_TOGGLE_COLUMNS);
        let mut x = rect.x.saturating_add(u16::try_from(Span::raw(prefix.as_str()).width()).unwrap_or(0));
        let mut spans = vec![Span::styled(prefix, Style::default().fg(Color::DarkGray))];

        for chip in &self.chips {
            let text = format!(" {} {} ", self.icons.visibility(chip.visible), chip.label);
            let width = u16::try_from(Span::raw(text.as_str()).width()).unwrap_or(0);
            let style = if chip.visible {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            };

            if x < rect.right() {
                let clipped = width.min(rect.right() - x);
                self.chip_areas.push((Rect::new(x, rect.y, clipped, 1), chip.id.clone()));
            }
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
            x = x.saturating_add(width).saturating_add(1);
        }

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
