use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Narrow key-value storage interface, local-storage style: reads of
/// missing or unreadable keys behave as absent, failed writes are logged
/// and dropped. Injected into the core components so tests can substitute
/// an in-memory fake.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Production store: one file per key under the platform data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store rooted at `data_dir/lumamail`. Nothing is touched
    /// on disk until the first write.
    pub fn open() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            root: base.join("lumamail"),
        }
    }

    #[cfg(test)]
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("storage: failed to read key {key}: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            log::error!("storage: failed to create {}: {e}", self.root.display());
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            log::error!("storage: failed to write key {key}: {e}");
        }
    }

    fn delete(&self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("storage: failed to delete key {key}: {e}"),
        }
    }
}

/// In-memory fake for tests. Tracks the number of writes so debounce
/// tests can assert how often a snapshot was actually persisted.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> (FileStore, PathBuf) {
        let root = std::env::temp_dir().join(format!(
            "lumamail-storage-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        (FileStore::with_root(root.clone()), root)
    }

    #[test]
    fn file_store_round_trip() {
        let (store, root) = temp_store("roundtrip");
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        store.set("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        store.delete("theme");
        assert_eq!(store.get("theme"), None);
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn deleting_a_missing_key_is_quiet() {
        let (store, root) = temp_store("delete-missing");
        store.delete("compose-draft");
        assert_eq!(store.get("compose-draft"), None);
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn memory_store_counts_writes() {
        let store = MemoryStore::new();
        store.set("k", "1");
        store.set("k", "2");
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.get("k").as_deref(), Some("2"));
        store.delete("k");
        assert!(!store.contains("k"));
    }
}
