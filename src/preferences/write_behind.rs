use super::{StorageBackend, StorageError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Command {
    Write { key: String, value: String },
    Flush(oneshot::Sender<()>),
}

/// Backend that acknowledges writes immediately and persists them from a
/// background tokio task.
///
/// Pending values sit in an overlay that reads consult first, so a slot
/// always reads back its latest write. Bursts of writes to the same slot
/// (a resize drag, for instance) are coalesced so only the last value hits
/// the inner backend. Without a tokio runtime, writes go straight through.
pub struct WriteBehindBackend {
    inner: Arc<dyn StorageBackend>,
    overlay: Arc<Mutex<HashMap<String, String>>>,
    sender: Option<mpsc::UnboundedSender<Command>>,
}

impl WriteBehindBackend {
    pub fn new<B: StorageBackend + 'static>(inner: B) -> Self {
        Self::from_shared(Arc::new(inner))
    }

    pub fn from_shared(inner: Arc<dyn StorageBackend>) -> Self {
        let overlay = Arc::new(Mutex::new(HashMap::new()));

        let sender = match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let (tx, rx) = mpsc::unbounded_channel();
                handle.spawn(flush_loop(rx, Arc::clone(&inner), Arc::clone(&overlay)));
                Some(tx)
            }
            Err(_) => {
                log::debug!("No tokio runtime; preference writes will be synchronous");
                None
            }
        };

        Self {
            inner,
            overlay,
            sender,
        }
    }

    /// Whether writes are handed to a background task
    pub fn is_background(&self) -> bool {
        self.sender.is_some()
    }

    /// Wait until every write issued so far has reached the inner backend.
    pub async fn flush(&self) {
        let Some(sender) = &self.sender else {
            return;
        };
        let (tx, rx) = oneshot::channel();
        if sender.send(Command::Flush(tx)).is_ok() {
            let _ = rx.await;
        }
    }
}

impl StorageBackend for WriteBehindBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if let Ok(overlay) = self.overlay.lock() {
            if let Some(value) = overlay.get(key) {
                return Ok(Some(value.clone()));
            }
        }
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(sender) = &self.sender else {
            return self.inner.write(key, value);
        };

        if let Ok(mut overlay) = self.overlay.lock() {
            overlay.insert(key.to_string(), value.to_string());
        }

        let command = Command::Write {
            key: key.to_string(),
            value: value.to_string(),
        };
        if sender.send(command).is_err() {
            // The flusher is gone (runtime shutting down); fall back to inline.
            return self.inner.write(key, value);
        }
        Ok(())
    }
}

async fn flush_loop(
    mut rx: mpsc::UnboundedReceiver<Command>,
    inner: Arc<dyn StorageBackend>,
    overlay: Arc<Mutex<HashMap<String, String>>>,
) {
    while let Some(command) = rx.recv().await {
        let mut pending: HashMap<String, String> = HashMap::new();
        let mut waiters = Vec::new();

        let mut next = Some(command);
        while let Some(command) = next {
            match command {
                Command::Write { key, value } => {
                    pending.insert(key, value);
                }
                Command::Flush(done) => waiters.push(done),
            }
            next = rx.try_recv().ok();
        }

        for (key, value) in pending {
            let target = Arc::clone(&inner);
            let (k, v) = (key.clone(), value.clone());
            let result = tokio::task::spawn_blocking(move || target.write(&k, &v)).await;

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::warn!("Background write of slot '{}' failed: {}", key, e),
                Err(e) => log::warn!("Background write of slot '{}' panicked: {}", key, e),
            }

            // Keep the overlay entry if a newer value arrived meanwhile.
            if let Ok(mut overlay) = overlay.lock() {
                if overlay.get(&key) == Some(&value) {
                    overlay.remove(&key);
                }
            }
        }

        for done in waiters {
            let _ = done.send(());
        }
    }
}
