//! Top-level component composing the toolbar, column chips, grid and footer.

use crate::grid::GridIntent;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{ColumnToggleBar, DataGridComponent, GridToolbar, LogsPanel, StatusBar};
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::{LayoutManager, MainAreas};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    Frame,
};

pub struct AppComponent {
    // Component composition
    grid: DataGridComponent,
    toolbar: GridToolbar,
    toggle_bar: ColumnToggleBar,
    logs_panel: LogsPanel,

    icons: IconService,
    areas: Option<MainAreas>,
    show_logs: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(grid: DataGridComponent, icons: IconService, logger: Logger) -> Self {
        let theme = icons.theme();
        Self {
            grid,
            toolbar: GridToolbar::new(theme),
            toggle_bar: ColumnToggleBar::new(theme),
            logs_panel: LogsPanel::new(logger),
            icons,
            areas: None,
            show_logs: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn grid(&self) -> &DataGridComponent {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut DataGridComponent {
        &mut self.grid
    }

    pub fn is_showing_logs(&self) -> bool {
        self.show_logs
    }

    /// Route one terminal event; returns whether a redraw is needed
    pub fn handle_event(&mut self, event: EventType) -> bool {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_events(mouse),
            EventType::Resize(_, _) => return true,
            EventType::Tick | EventType::Other => return false,
        };
        self.dispatch(action);
        true
    }

    /// Apply an action: grid state first, then application-level effects
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        match action {
            Action::ShowLogs(show) => self.show_logs = show,
            Action::CycleIcons => {
                self.icons.cycle_icon_theme();
                let theme = self.icons.theme();
                self.grid.set_icon_theme(theme);
                self.toolbar.set_icon_theme(theme);
                self.toggle_bar.set_icon_theme(theme);
                log::debug!("Icon theme switched to {:?}", theme);
            }
            Action::Quit => self.should_quit = true,
            _ => {}
        }
        self.forward_intents();
    }

    /// Hand grid intents to the host. Edits have no local effect.
    fn forward_intents(&mut self) {
        for intent in self.grid.drain_intents() {
            match intent {
                GridIntent::RowDelete(ids) => {
                    log::info!("Row delete requested: {}", join_ids(&ids));
                }
                GridIntent::BulkEdit(ids) => {
                    log::info!("Bulk edit requested: {}", join_ids(&ids));
                }
                GridIntent::RowEdit(id) => {
                    log::info!("Edit requested for row {}", id);
                }
            }
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        // Keep keys for the gesture while one is in flight
        if !self.grid.drag().is_idle() {
            return None;
        }
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('L') => Some(Action::ShowLogs(true)),
            KeyCode::Char('I') => Some(Action::CycleIcons),
            KeyCode::Char('R') => Some(Action::ResetLayout),
            KeyCode::Char('1'..='9') => {
                self.toggle_bar.sync(self.grid.layout());
                Some(self.toggle_bar.handle_key_events(key))
            }
            _ => None,
        }
    }
}

fn join_ids(ids: &[crate::grid::RowId]) -> String {
    ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ")
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.show_logs {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }
            return self.logs_panel.handle_key_events(key);
        }
        if let Some(action) = self.handle_global_key(key) {
            return action;
        }
        self.grid.handle_key_events(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.show_logs {
            return Action::None;
        }
        let Some(areas) = self.areas else {
            return Action::None;
        };

        // Drags and releases belong to whatever gesture the grid started
        if let MouseEventKind::Down(_) = mouse.kind {
            let at = Position::new(mouse.column, mouse.row);
            if areas.toolbar.contains(at) {
                return self.toolbar.handle_mouse_events(mouse);
            }
            if areas.toggle_bar.contains(at) {
                return self.toggle_bar.handle_mouse_events(mouse);
            }
        }
        self.grid.handle_mouse_events(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        self.grid.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);
        self.areas = Some(areas);

        self.toolbar.set_mode(self.grid.selection().toolbar());
        self.toggle_bar.sync(self.grid.layout());

        self.toolbar.render(f, areas.toolbar);
        self.toggle_bar.render(f, areas.toggle_bar);
        self.grid.render(f, areas.grid);
        StatusBar::render(f, areas.status, &self.grid.status_info());

        if self.show_logs {
            self.logs_panel.render(f, LayoutManager::centered_rect(80, 70, rect));
        }
    }
}
