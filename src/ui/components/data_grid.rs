//! The data grid: header row with drag and resize handles, selectable rows.
//!
//! All state changes go through [`ColumnLayout`], [`DragController`] and
//! [`RowSelection`]; this component only maps terminal input onto them and
//! draws the [`GridView`] they produce.

use super::cells::display_line;
use super::scrollbar_helper::ScrollbarHelper;
use super::status_bar::StatusInfo;
use crate::config::Config;
use crate::constants::{DEFAULT_GRID_TITLE, EMPTY_TABLE_MESSAGE, LOG_LAYOUT_RESET};
use crate::grid::{
    build_view, ColumnLayout, ColumnRegistry, DragController, DragInput, DragOutcome, GridIntent, GridView,
    HeaderBounds, HeaderView, ResizeGesture, RowId, RowRecord, RowSelection,
};
use crate::icons::{IconService, IconTheme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::{LayoutManager, CHECKBOX_COLUMN_WIDTH};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A row as drawn during the last render
#[derive(Debug, Clone)]
struct RowArea {
    index: usize,
    id: RowId,
    area: Rect,
}

pub struct DataGridComponent {
    layout: ColumnLayout,
    selection: RowSelection,
    drag: DragController,
    resize: Option<ResizeGesture>,
    icons: IconService,
    cell_width_px: u32,

    cursor: usize,
    focused_column: usize,
    scroll_offset: usize,
    scrollbar: ScrollbarHelper,

    // Hit-test geometry from the last render. Header bounds follow the
    // committed order so the drop target does not move under the pointer
    // while the preview reshuffles.
    header_bounds: Vec<HeaderBounds>,
    header_checkbox: Rect,
    row_areas: Vec<RowArea>,
    actions_area: Option<(u16, u16)>,

    intents: Vec<GridIntent>,
    title: String,
}

impl DataGridComponent {
    pub fn new(layout: ColumnLayout, rows: Vec<RowRecord>, config: &Config) -> Self {
        let cell_width_px = config.ui.cell_width_px.max(1);
        // Pointer positions are in cells
        let activation_cells = config.layout.drag_activation_px as f32 / cell_width_px as f32;

        Self {
            layout,
            selection: RowSelection::new(rows),
            drag: DragController::new(activation_cells),
            resize: None,
            icons: IconService::new(config.ui.icon_theme),
            cell_width_px,
            cursor: 0,
            focused_column: 0,
            scroll_offset: 0,
            scrollbar: ScrollbarHelper::new(),
            header_bounds: Vec::new(),
            header_checkbox: Rect::default(),
            row_areas: Vec::new(),
            actions_area: None,
            intents: Vec::new(),
            title: DEFAULT_GRID_TITLE.to_string(),
        }
    }

    /// Label shown in the grid border, followed by the record count
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_icon_theme(&mut self, theme: IconTheme) {
        self.icons.set_theme(theme);
    }

    /// Intents for the host, oldest first
    pub fn drain_intents(&mut self) -> Vec<GridIntent> {
        std::mem::take(&mut self.intents)
    }

    /// Swap in fresh rows from the host
    pub fn replace_rows(&mut self, rows: Vec<RowRecord>) {
        self.selection.replace_rows(rows);
        self.clamp_cursor();
    }

    /// Adopt a changed column catalogue
    pub fn reconcile(&mut self, registry: ColumnRegistry) -> bool {
        self.drag.cancel();
        self.resize = None;
        self.layout.reconcile(registry)
    }

    /// Current view, following the drag preview when one is active
    pub fn view(&self) -> GridView {
        let preview = self.drag.preview_order(self.layout.order());
        build_view(&self.layout, &self.selection, preview.as_deref())
    }

    /// Visible columns that can be dragged, in committed order
    pub fn movable_visible_ids(&self) -> Vec<String> {
        self.layout
            .visible_columns()
            .into_iter()
            .filter(|column| !column.is_actions())
            .map(|column| column.id.clone())
            .collect()
    }

    pub fn focused_column_id(&self) -> Option<String> {
        let ids = self.movable_visible_ids();
        let index = self.focused_column.min(ids.len().saturating_sub(1));
        ids.into_iter().nth(index)
    }

    pub fn cursor_row_id(&self) -> Option<RowId> {
        self.selection.rows().get(self.cursor).map(|row| row.id.clone())
    }

    pub fn status_info(&self) -> StatusInfo {
        let label = |id: &str| {
            self.layout
                .registry()
                .get(id)
                .map_or_else(|| id.to_string(), |column| column.label.clone())
        };

        StatusInfo {
            records: self.selection.rows().len(),
            selected: self.selection.len(),
            dragging: self
                .drag
                .active()
                .map(|drag| (label(&drag.id), drag.over.as_deref().map(label))),
            resizing: self.resize.as_ref().map(|gesture| label(&gesture.id)),
        }
    }

    fn all_selected(&self) -> bool {
        !self.selection.rows().is_empty() && self.selection.len() == self.selection.rows().len()
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.selection.rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.selection.rows().len().saturating_sub(1));
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.movable_visible_ids().len();
        if len == 0 {
            self.focused_column = 0;
            return;
        }
        self.focused_column = self.focused_column.min(len - 1).saturating_add_signed(delta).min(len - 1);
    }

    fn delete(&mut self, ids: &[RowId]) {
        let removed = self.selection.delete_rows(ids);
        if !removed.is_empty() {
            self.intents.push(GridIntent::RowDelete(removed));
        }
        self.clamp_cursor();
    }

    fn ensure_cursor_visible(&mut self, viewport: usize) {
        let total = self.selection.rows().len();
        if viewport == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + viewport {
            self.scroll_offset = self.cursor + 1 - viewport;
        }
        self.scroll_offset = self.scroll_offset.min(total.saturating_sub(viewport));
    }

    fn handle_drag_keys(&mut self, key: KeyEvent) -> Action {
        let candidates = self.movable_visible_ids();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.drag.step(-1, &candidates);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.drag.step(1, &candidates);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.drag.confirm() {
                DragOutcome::Committed(intent) => Action::ReorderColumns(intent),
                _ => Action::None,
            },
            KeyCode::Esc => {
                self.drag.cancel();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn resize_edge_at(&self, at: Position) -> Option<&str> {
        self.header_bounds
            .iter()
            .filter(|header| header.draggable && header.area.width > 1)
            .find(|header| at.y == header.area.y && at.x == header.area.right() - 1)
            .map(|header| header.id.as_str())
    }

    fn row_at(&self, at: Position) -> Option<&RowArea> {
        self.row_areas.iter().find(|row| row.area.contains(at))
    }

    fn handle_row_click(&mut self, at: Position) -> Action {
        let Some(row) = self.row_at(at).cloned() else {
            return Action::None;
        };

        if at.x < row.area.x + CHECKBOX_COLUMN_WIDTH {
            return Action::ToggleRow(row.id);
        }

        if let Some((x, width)) = self.actions_area {
            if at.x >= x && at.x < x + width {
                let edit_width = u16::try_from(Span::raw(self.icons.edit()).width()).unwrap_or(1);
                return if at.x <= x + edit_width {
                    Action::EditRow(row.id)
                } else {
                    Action::DeleteRows(vec![row.id])
                };
            }
        }

        self.cursor = row.index;
        Action::None
    }

    /// Header bounds in committed order, used for all pointer hit tests
    fn committed_bounds(&self, header_line: Rect, data_x: u16) -> Vec<HeaderBounds> {
        let columns = self.layout.visible_columns();
        let widths: Vec<u16> = columns
            .iter()
            .map(|column| LayoutManager::px_to_cells(self.layout.width_px(&column.id), self.cell_width_px))
            .collect();

        LayoutManager::column_rects(header_line, data_x, &widths)
            .into_iter()
            .zip(columns)
            .filter_map(|(rect, column)| rect.map(|area| HeaderBounds::new(column.id.clone(), area, !column.is_actions())))
            .collect()
    }

    fn render_header(&self, f: &mut Frame, header: &HeaderView, area: Rect, focused: Option<&str>) {
        let dragged = self.drag.active_id() == Some(header.id.as_str());
        let resizing = self.resize.as_ref().is_some_and(|gesture| gesture.id == header.id);

        let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        if dragged {
            style = style.fg(Color::White).bg(Color::Blue);
        } else if self.drag.is_idle() && focused == Some(header.id.as_str()) {
            style = style.fg(Color::Yellow);
        }

        let text = if !header.draggable() {
            header.label.clone()
        } else if dragged {
            format!("{} {}", self.icons.dragging(), header.label)
        } else {
            format!("{} {}", self.icons.grip(), header.label)
        };

        let label_width = if header.draggable() {
            area.width.saturating_sub(1)
        } else {
            area.width
        };
        f.render_widget(
            Paragraph::new(Line::from(text)).style(style),
            Rect {
                width: label_width,
                ..area
            },
        );

        if header.draggable() && area.width > 1 {
            let handle_style = if resizing {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            f.render_widget(
                Paragraph::new(self.icons.resize_handle()).style(handle_style),
                Rect::new(area.right() - 1, area.y, 1, 1),
            );
        }
    }

    fn actions_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.icons.edit(), Style::default().fg(Color::Blue)),
            Span::raw(" "),
            Span::styled(self.icons.delete(), Style::default().fg(Color::Red)),
        ])
    }
}

impl Component for DataGridComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.drag.active().is_some_and(|drag| drag.input == DragInput::Keyboard) {
            return self.handle_drag_keys(key);
        }

        match key.code {
            KeyCode::Esc if !self.drag.is_idle() || self.resize.is_some() => {
                self.drag.cancel();
                self.resize = None;
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                Action::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor = self.selection.rows().len().saturating_sub(1);
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_focus(-1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_focus(1);
                Action::None
            }
            KeyCode::Char(' ') => self.cursor_row_id().map_or(Action::None, Action::ToggleRow),
            KeyCode::Char('a') => Action::ToggleAllRows,
            KeyCode::Char('x') | KeyCode::Esc => Action::ClearSelection,
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.selection.is_empty() {
                    self.cursor_row_id()
                        .map_or(Action::None, |id| Action::DeleteRows(vec![id]))
                } else {
                    Action::DeleteSelected
                }
            }
            KeyCode::Char('e') => self.cursor_row_id().map_or(Action::None, Action::EditRow),
            KeyCode::Char('E') => Action::EditSelected,
            KeyCode::Char('v') => self.focused_column_id().map_or(Action::None, Action::ToggleColumn),
            KeyCode::Char('+') | KeyCode::Char('=') => self.focused_column_id().map_or(Action::None, |id| {
                Action::ResizeColumn {
                    id,
                    delta_px: i64::from(self.cell_width_px),
                }
            }),
            KeyCode::Char('-') => self.focused_column_id().map_or(Action::None, |id| Action::ResizeColumn {
                id,
                delta_px: -i64::from(self.cell_width_px),
            }),
            KeyCode::Char('g') => {
                if let Some(id) = self.focused_column_id() {
                    let candidates = self.movable_visible_ids();
                    self.drag.grab(&id, &candidates);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let at = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = self.resize_edge_at(at).map(str::to_string) {
                    if self.drag.is_idle() {
                        self.resize = ResizeGesture::begin(&self.layout, &id, at.x, self.cell_width_px);
                    }
                    return Action::None;
                }
                if self.header_checkbox.contains(at) {
                    return Action::ToggleAllRows;
                }
                if self.drag.pointer_down(at, &self.header_bounds) {
                    return Action::None;
                }
                self.handle_row_click(at)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(gesture) = &self.resize {
                    gesture.update(&mut self.layout, at.x);
                } else {
                    self.drag.pointer_move(at, &self.header_bounds);
                }
                Action::None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.resize.take().is_some() {
                    return Action::None;
                }
                match self.drag.pointer_up(at, &self.header_bounds) {
                    DragOutcome::Committed(intent) => Action::ReorderColumns(intent),
                    _ => Action::None,
                }
            }
            MouseEventKind::ScrollDown => {
                self.move_cursor(1);
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.move_cursor(-1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleColumn(id) => {
                self.layout.toggle_visibility(&id);
            }
            Action::ResizeColumn { id, delta_px } => {
                self.layout.resize_by(&id, delta_px);
            }
            Action::ReorderColumns(intent) => {
                self.layout.reorder(&intent.moved, &intent.target);
            }
            Action::ResetLayout => {
                self.drag.cancel();
                self.resize = None;
                self.layout.reset();
                self.selection.clear_selection();
                self.focused_column = 0;
                log::info!("{}", LOG_LAYOUT_RESET);
            }
            Action::ToggleRow(id) => {
                self.selection.toggle_row(&id);
            }
            Action::ToggleAllRows => {
                if self.all_selected() {
                    self.selection.clear_selection();
                } else {
                    self.selection.select_all();
                }
            }
            Action::ClearSelection => self.selection.clear_selection(),
            Action::DeleteRows(ids) => self.delete(&ids),
            Action::DeleteSelected => {
                let ids = self.selection.selected_ids();
                self.delete(&ids);
            }
            Action::EditRow(id) => {
                if self.selection.contains_row(&id) {
                    self.intents.push(GridIntent::RowEdit(id));
                }
            }
            Action::EditSelected => {
                let ids = self.selection.selected_ids();
                if !ids.is_empty() {
                    self.intents.push(GridIntent::BulkEdit(ids));
                }
            }
            other => return other,
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let view = self.view();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({}) ", self.title, view.rows.len()))
            .border_style(Style::default().fg(if self.drag.active().is_some() {
                Color::Blue
            } else {
                Color::Gray
            }));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.row_areas.clear();
        self.actions_area = None;
        if inner.width <= CHECKBOX_COLUMN_WIDTH || inner.height < 2 {
            self.header_bounds.clear();
            self.header_checkbox = Rect::default();
            return;
        }

        let body = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        let (rows_area, scrollbar_area) = ScrollbarHelper::calculate_areas(body, view.rows.len());
        let header_line = Rect {
            height: 1,
            width: rows_area.width,
            ..inner
        };
        let data_x = header_line.x + CHECKBOX_COLUMN_WIDTH;

        self.header_bounds = self.committed_bounds(header_line, data_x);
        self.header_checkbox = Rect::new(header_line.x, header_line.y, CHECKBOX_COLUMN_WIDTH, 1);

        // Header row, drawn in preview order
        f.render_widget(
            Paragraph::new(self.icons.checkbox(self.all_selected())),
            self.header_checkbox,
        );
        let widths: Vec<u16> = view
            .headers
            .iter()
            .map(|header| LayoutManager::px_to_cells(header.width_px, self.cell_width_px))
            .collect();
        let columns = LayoutManager::column_rects(header_line, data_x, &widths);
        let focused = self.focused_column_id();
        for (header, rect) in view.headers.iter().zip(&columns) {
            if let Some(area) = rect {
                self.render_header(f, header, *area, focused.as_deref());
            }
        }

        if view.is_empty() {
            f.render_widget(
                Paragraph::new(EMPTY_TABLE_MESSAGE)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
                rows_area,
            );
            self.scroll_offset = 0;
            return;
        }

        let viewport = usize::from(rows_area.height);
        self.clamp_cursor();
        self.ensure_cursor_visible(viewport);

        for (index, row) in view.rows.iter().enumerate().skip(self.scroll_offset).take(viewport) {
            let offset = u16::try_from(index - self.scroll_offset).unwrap_or(u16::MAX);
            let row_rect = Rect::new(rows_area.x, rows_area.y + offset, rows_area.width, 1);

            let mut style = Style::default();
            if row.selected {
                style = style.fg(Color::Cyan);
            }
            if index == self.cursor {
                style = style.bg(Color::DarkGray);
            }
            f.render_widget(Block::default().style(style), row_rect);
            f.render_widget(
                Paragraph::new(self.icons.checkbox(row.selected)).style(style),
                Rect::new(row_rect.x, row_rect.y, CHECKBOX_COLUMN_WIDTH, 1),
            );

            for ((header, cell), rect) in view.headers.iter().zip(&row.cells).zip(&columns) {
                let Some(column) = rect else { continue };
                let cell_rect = Rect {
                    y: row_rect.y,
                    height: 1,
                    width: column.width.saturating_sub(1),
                    ..*column
                };
                let line = if header.draggable() {
                    display_line(cell, cell_rect.width)
                } else {
                    self.actions_area = Some((column.x, column.width));
                    self.actions_line()
                };
                f.render_widget(Paragraph::new(line).style(style), cell_rect);
            }

            self.row_areas.push(RowArea {
                index,
                id: row.id.clone(),
                area: row_rect,
            });
        }

        self.scrollbar
            .update_state(view.rows.len(), self.scroll_offset, viewport);
        self.scrollbar.render(f, scrollbar_area);
    }
}
