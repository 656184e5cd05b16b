use crate::config::Config;
use crate::grid::{ColumnLayout, ColumnRegistry, LayoutOptions, RowRecord};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::preferences::PreferenceStore;
use crate::ui::app::AppComponent;
use crate::ui::components::DataGridComponent;
use crate::ui::core::{Component, EventHandler};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Build the grid titled `title` from `registry` and `rows`, restore its
/// layout from `store`, and run the terminal UI until the user quits.
pub async fn run_app(
    config: &Config,
    store: PreferenceStore,
    title: &str,
    registry: ColumnRegistry,
    rows: Vec<RowRecord>,
    logger: Logger,
) -> anyhow::Result<()> {
    let options = LayoutOptions {
        min_width_px: config.layout.min_column_width_px,
        schema_version: config.layout.schema_version.clone(),
    };
    let layout = ColumnLayout::load(registry, store, options);
    let grid = DataGridComponent::new(layout, rows, config).with_title(title);
    let mut app = AppComponent::new(grid, IconService::new(config.ui.icon_theme), logger);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        needs_render |= app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
