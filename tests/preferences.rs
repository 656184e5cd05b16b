use gridline::preferences::{
    FileBackend, MemoryBackend, PreferenceStore, StorageBackend, StorageError, WriteBehindBackend,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Backend whose every operation fails, like a browser with storage disabled
struct BrokenBackend;

impl StorageBackend for BrokenBackend {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }
}

/// Memory backend that counts writes reaching it
#[derive(Clone, Default)]
struct CountingBackend {
    inner: MemoryBackend,
    writes: Arc<AtomicUsize>,
}

impl StorageBackend for CountingBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, value)
    }
}

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gridline-{}-{}", name, std::process::id()))
}

#[test]
fn test_missing_slot_yields_default() {
    let store = PreferenceStore::in_memory();
    let order: Vec<String> = store.load("table_order_v1", vec!["a".to_string()]);
    assert_eq!(order, vec!["a".to_string()]);
}

#[test]
fn test_save_then_load() {
    let backend = MemoryBackend::new();
    let store = PreferenceStore::new(backend.clone());

    let mut sizing = BTreeMap::new();
    sizing.insert("name".to_string(), 220u32);
    store.save("table_sizing_v1", &sizing);

    assert_eq!(backend.raw("table_sizing_v1").as_deref(), Some(r#"{"name":220}"#));
    let loaded: BTreeMap<String, u32> = store.load("table_sizing_v1", BTreeMap::new());
    assert_eq!(loaded, sizing);
}

#[test]
fn test_corrupt_slot_yields_default() {
    let backend = MemoryBackend::new();
    backend.write("table_order_v1", "{not json").unwrap();
    let store = PreferenceStore::new(backend);

    let order: Vec<String> = store.load("table_order_v1", Vec::new());
    assert!(order.is_empty());
}

#[test]
fn test_wrong_shape_yields_default() {
    let backend = MemoryBackend::new();
    backend.write("table_visibility_v1", "[1, 2, 3]").unwrap();
    let store = PreferenceStore::new(backend);

    let visibility: BTreeMap<String, bool> = store.load("table_visibility_v1", BTreeMap::new());
    assert!(visibility.is_empty());
}

#[test]
fn test_unavailable_backend_is_silent() {
    let store = PreferenceStore::new(BrokenBackend);
    store.save("table_order_v1", &vec!["a"]);
    let order: Vec<String> = store.load("table_order_v1", vec!["fallback".to_string()]);
    assert_eq!(order, vec!["fallback".to_string()]);
}

#[test]
fn test_file_backend_round_trip() {
    let dir = temp_dir("file-backend");
    let backend = FileBackend::new(&dir);

    assert_eq!(backend.read("table_order_v1").unwrap(), None);
    backend.write("table_order_v1", r#"["b","a"]"#).unwrap();
    assert!(dir.join("table_order_v1.json").exists());
    assert_eq!(backend.read("table_order_v1").unwrap().as_deref(), Some(r#"["b","a"]"#));

    // A second backend on the same directory sees the slot
    let reopened = PreferenceStore::new(FileBackend::new(&dir));
    let order: Vec<String> = reopened.load("table_order_v1", Vec::new());
    assert_eq!(order, vec!["b".to_string(), "a".to_string()]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_file_backend_rejects_path_keys() {
    let backend = FileBackend::new(temp_dir("bad-keys"));
    assert!(matches!(backend.slot_path("../escape"), Err(StorageError::InvalidKey(_))));
    assert!(matches!(backend.slot_path(""), Err(StorageError::InvalidKey(_))));
    assert!(backend.write(".hidden", "1").is_err());
}

#[test]
fn test_write_behind_without_runtime_writes_inline() {
    let counting = CountingBackend::default();
    let backend = WriteBehindBackend::new(counting.clone());
    assert!(!backend.is_background());

    backend.write("k", "1").unwrap();
    assert_eq!(counting.writes.load(Ordering::SeqCst), 1);
    assert_eq!(counting.inner.raw("k").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_write_behind_reads_its_own_writes() {
    let counting = CountingBackend::default();
    let backend = WriteBehindBackend::new(counting.clone());
    assert!(backend.is_background());

    backend.write("table_order_v1", r#"["a"]"#).unwrap();
    assert_eq!(backend.read("table_order_v1").unwrap().as_deref(), Some(r#"["a"]"#));

    backend.flush().await;
    assert_eq!(counting.inner.raw("table_order_v1").as_deref(), Some(r#"["a"]"#));
}

#[tokio::test]
async fn test_write_behind_keeps_last_value() {
    let counting = CountingBackend::default();
    let backend = Arc::new(WriteBehindBackend::new(counting.clone()));
    let store = PreferenceStore::from_shared(backend.clone());

    for width in 40u32..60 {
        let mut sizing = BTreeMap::new();
        sizing.insert("name".to_string(), width);
        store.save("table_sizing_v1", &sizing);
    }
    backend.flush().await;

    assert_eq!(counting.inner.raw("table_sizing_v1").as_deref(), Some(r#"{"name":59}"#));
    assert!(counting.writes.load(Ordering::SeqCst) <= 20);

    let loaded: BTreeMap<String, u32> = store.load("table_sizing_v1", BTreeMap::new());
    assert_eq!(loaded.get("name"), Some(&59));
}
