use anyhow::Result;
use gridline::config::Config;
use gridline::demo::{TEAM_COLUMNS, TEAM_GRID_TITLE, TEAM_MEMBERS};
use gridline::logger::Logger;
use gridline::preferences::{FileBackend, PreferenceStore, StorageBackend, WriteBehindBackend};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration: {e:#}");
            return Ok(());
        }
    };

    let logger = Logger::new();
    logger.init(&config.logging)?;

    let (store, write_behind) = open_store(&config);

    gridline::ui::run_app(&config, store, TEAM_GRID_TITLE, TEAM_COLUMNS.clone(), TEAM_MEMBERS.clone(), logger).await?;

    if let Some(backend) = write_behind {
        backend.flush().await;
    }
    Ok(())
}

/// File-backed store under the configured directory, falling back to memory
/// when no directory can be determined.
fn open_store(config: &Config) -> (PreferenceStore, Option<Arc<WriteBehindBackend>>) {
    let dir = match config.storage_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Layout will not be saved: {e}");
            return (PreferenceStore::in_memory(), None);
        }
    };
    log::info!("Layout preferences stored in {}", dir.display());

    let file = FileBackend::new(dir);
    if !config.storage.write_behind {
        return (PreferenceStore::new(file), None);
    }

    let backend = Arc::new(WriteBehindBackend::new(file));
    let shared: Arc<dyn StorageBackend> = backend.clone();
    (PreferenceStore::from_shared(shared), Some(backend))
}
