use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gridline::config::Config;
use gridline::grid::{ColumnDefinition, ColumnLayout, ColumnRegistry, GridIntent, LayoutOptions, RowId, RowRecord};
use gridline::icons::IconService;
use gridline::logger::Logger;
use gridline::preferences::{MemoryBackend, PreferenceStore};
use gridline::ui::components::DataGridComponent;
use gridline::ui::core::{Action, Component, EventType};
use gridline::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};

// Grid drawn at (0,0,120,20): header row at y=1, rows from y=2.
// Checkbox column x 1..5, then a:[5,15) b:[15,25) c:[25,35) actions:[35,47).
const HEADER_Y: u16 = 1;
const FIRST_ROW_Y: u16 = 2;

fn registry() -> ColumnRegistry {
    ColumnRegistry::new(vec![
        ColumnDefinition::new("a", "Alpha", 80),
        ColumnDefinition::new("b", "Beta", 80),
        ColumnDefinition::new("c", "Gamma", 80),
        ColumnDefinition::actions(),
    ])
}

fn rows() -> Vec<RowRecord> {
    (1..=3u64)
        .map(|id| RowRecord::new(id).with("a", format!("alpha-{id}")).with("b", "beta"))
        .collect()
}

fn grid(backend: &MemoryBackend) -> DataGridComponent {
    let layout = ColumnLayout::load(registry(), PreferenceStore::new(backend.clone()), LayoutOptions::default());
    DataGridComponent::new(layout, rows(), &Config::default())
}

fn draw<C: Component>(component: &mut C) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
    terminal.draw(|f| component.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed an input through the component the way the app does
fn press<C: Component>(component: &mut C, code: KeyCode) {
    let action = component.handle_key_events(key(code));
    component.update(action);
}

fn click<C: Component>(component: &mut C, column: u16, row: u16) {
    let action = component.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    component.update(action);
}

#[test]
fn test_renders_headers_and_rows() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);
    let screen = draw(&mut grid);

    assert!(screen.contains("Alpha"));
    assert!(screen.contains("Gamma"));
    assert!(screen.contains("alpha-3"));
    assert!(screen.contains("Actions"));
}

#[test]
fn test_border_title_shows_record_count() {
    let backend = MemoryBackend::new();
    assert!(draw(&mut grid(&backend)).contains(" Records (3) "));

    let mut titled = grid(&backend).with_title("Team Members");
    assert!(draw(&mut titled).contains(" Team Members (3) "));
}

#[test]
fn test_empty_grid_shows_placeholder() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);
    grid.replace_rows(Vec::new());
    assert!(draw(&mut grid).contains("No data available."));
}

#[test]
fn test_header_drag_reorders_columns() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);
    draw(&mut grid);

    let down = grid.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 7, HEADER_Y));
    assert_eq!(down, Action::None);
    grid.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 21, HEADER_Y));
    assert_eq!(grid.drag().over_id(), Some("b"));
    assert_eq!(grid.view().header_ids(), vec!["b", "a", "c", "actions"]);
    assert_eq!(grid.layout().order(), ["a", "b", "c", "actions"]);

    let up = grid.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), 21, HEADER_Y));
    assert!(matches!(up, Action::ReorderColumns(_)));
    grid.update(up);

    assert_eq!(grid.layout().order(), ["b", "a", "c", "actions"]);
    assert_eq!(backend.raw("table_order_v1").as_deref(), Some(r#"["b","a","c","actions"]"#));
}

#[test]
fn test_escape_cancels_pointer_drag() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);
    draw(&mut grid);

    grid.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 7, HEADER_Y));
    grid.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 30, HEADER_Y));
    assert!(grid.drag().active().is_some());

    press(&mut grid, KeyCode::Esc);
    assert!(grid.drag().is_idle());

    let up = grid.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), 30, HEADER_Y));
    assert_eq!(up, Action::None);
    assert_eq!(grid.layout().order(), ["a", "b", "c", "actions"]);
    assert!(backend.is_empty());
}

#[test]
fn test_resize_handle_drag_changes_width() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);
    draw(&mut grid);

    // Right edge of column a
    grid.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 14, HEADER_Y));
    assert!(grid.is_resizing());
    grid.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 19, HEADER_Y));
    assert_eq!(grid.layout().width_px("a"), 120);

    grid.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 0, HEADER_Y));
    assert_eq!(grid.layout().width_px("a"), 40);

    grid.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), 0, HEADER_Y));
    assert!(!grid.is_resizing());
    assert!(grid.drag().is_idle());
    assert_eq!(backend.raw("table_sizing_v1").as_deref(), Some(r#"{"a":40}"#));
}

#[test]
fn test_keyboard_reorder() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);

    press(&mut grid, KeyCode::Char('g'));
    assert_eq!(grid.drag().active_id(), Some("a"));
    press(&mut grid, KeyCode::Right);
    press(&mut grid, KeyCode::Right);
    press(&mut grid, KeyCode::Enter);

    assert!(grid.drag().is_idle());
    assert_eq!(grid.layout().order(), ["b", "c", "a", "actions"]);
}

#[test]
fn test_keyboard_resize_and_hide_focused_column() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);

    press(&mut grid, KeyCode::Right);
    assert_eq!(grid.focused_column_id().as_deref(), Some("b"));
    press(&mut grid, KeyCode::Char('+'));
    assert_eq!(grid.layout().width_px("b"), 88);
    press(&mut grid, KeyCode::Char('v'));
    assert!(!grid.layout().is_visible("b"));
    assert_eq!(grid.focused_column_id().as_deref(), Some("c"));
}

#[test]
fn test_row_checkbox_and_bulk_delete() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);
    draw(&mut grid);

    click(&mut grid, 2, FIRST_ROW_Y);
    click(&mut grid, 2, FIRST_ROW_Y + 2);
    assert_eq!(grid.selection().selected_ids(), vec![RowId::from(1u64), RowId::from(3u64)]);

    press(&mut grid, KeyCode::Char('d'));
    let remaining: Vec<&str> = grid.selection().rows().iter().map(|row| row.id.as_str()).collect();
    assert_eq!(remaining, vec!["2"]);
    assert!(grid.selection().is_empty());
    assert_eq!(
        grid.drain_intents(),
        vec![GridIntent::RowDelete(vec![RowId::from(1u64), RowId::from(3u64)])]
    );
    assert!(grid.drain_intents().is_empty());
}

#[test]
fn test_actions_cell_emits_intents() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);
    draw(&mut grid);

    // ASCII theme: "E X" starting at the actions column
    click(&mut grid, 35, FIRST_ROW_Y + 1);
    assert_eq!(grid.drain_intents(), vec![GridIntent::RowEdit(RowId::from(2u64))]);
    assert_eq!(grid.selection().rows().len(), 3);

    click(&mut grid, 37, FIRST_ROW_Y + 1);
    assert_eq!(grid.drain_intents(), vec![GridIntent::RowDelete(vec![RowId::from(2u64)])]);
    assert_eq!(grid.selection().rows().len(), 2);
}

#[test]
fn test_bulk_edit_is_pass_through() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);

    press(&mut grid, KeyCode::Char('a'));
    press(&mut grid, KeyCode::Char('E'));
    assert_eq!(grid.selection().len(), 3);
    assert_eq!(grid.selection().rows().len(), 3);
    assert!(matches!(grid.drain_intents().as_slice(), [GridIntent::BulkEdit(ids)] if ids.len() == 3));
}

#[test]
fn test_reset_restores_defaults_and_clears_selection() {
    let backend = MemoryBackend::new();
    let mut grid = grid(&backend);
    press(&mut grid, KeyCode::Char('g'));
    press(&mut grid, KeyCode::Right);
    press(&mut grid, KeyCode::Enter);
    grid.update(Action::ToggleColumn("c".to_string()));
    grid.update(Action::ToggleRow(RowId::from(2u64)));

    grid.update(Action::ResetLayout);

    assert_eq!(grid.layout().order(), ["a", "b", "c", "actions"]);
    assert!(grid.layout().visibility().is_empty());
    assert!(grid.selection().is_empty());
    assert_eq!(backend.raw("table_visibility_v1").as_deref(), Some("{}"));
}

fn app(backend: &MemoryBackend) -> AppComponent {
    AppComponent::new(grid(backend), IconService::default(), Logger::new())
}

#[test]
fn test_app_quits_on_q() {
    let backend = MemoryBackend::new();
    let mut app = app(&backend);
    assert!(!app.should_quit());
    app.handle_event(EventType::Key(key(KeyCode::Char('q'))));
    assert!(app.should_quit());
}

#[test]
fn test_app_toolbar_switches_to_bulk_mode() {
    let backend = MemoryBackend::new();
    let mut app = app(&backend);

    assert!(draw(&mut app).contains("Reset Layout"));

    app.handle_event(EventType::Key(key(KeyCode::Char('a'))));
    let screen = draw(&mut app);
    assert!(screen.contains("3 selected"));
    assert!(!screen.contains("Reset Layout"));

    app.handle_event(EventType::Key(key(KeyCode::Char('x'))));
    assert!(draw(&mut app).contains("Reset Layout"));
}

#[test]
fn test_app_number_keys_toggle_columns() {
    let backend = MemoryBackend::new();
    let mut app = app(&backend);

    app.handle_event(EventType::Key(key(KeyCode::Char('2'))));
    assert!(!app.grid().layout().is_visible("b"));
    app.handle_event(EventType::Key(key(KeyCode::Char('2'))));
    assert!(app.grid().layout().is_visible("b"));
}

#[test]
fn test_app_logs_panel_captures_keys() {
    let backend = MemoryBackend::new();
    let mut app = app(&backend);

    app.handle_event(EventType::Key(key(KeyCode::Char('L'))));
    assert!(app.is_showing_logs());
    app.handle_event(EventType::Key(key(KeyCode::Char('q'))));
    assert!(!app.should_quit());
    app.handle_event(EventType::Key(key(KeyCode::Esc)));
    assert!(!app.is_showing_logs());
}
