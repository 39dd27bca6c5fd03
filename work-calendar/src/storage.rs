//! Key-value stores used to persist user preferences between sessions.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A store of string values, similar to the web storage API.
pub trait Storage {
    /// Get the value stored for a key, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous value for this key.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// A store that is lost when dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store backed by a JSON object in a file, which is rewritten after each
/// update.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at given path. A missing or unreadable file results in
    /// an empty store, which will replace the file on first update.
    ///
    /// ```
    /// use work_calendar::storage::{FileStorage, Storage};
    ///
    /// let path = std::env::temp_dir().join("work-calendar-doctest-storage.json");
    /// let _ = std::fs::remove_file(&path);
    ///
    /// let mut storage = FileStorage::open(&path);
    /// assert_eq!(storage.get_item("theme").unwrap(), None);
    /// storage.set_item("theme", "dark").unwrap();
    ///
    /// let reopened = FileStorage::open(&path);
    /// assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("dark"));
    /// # std::fs::remove_file(&path).unwrap();
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let items = match Self::read_items(&path) {
            Ok(items) => items,
            Err(_err) => {
                #[cfg(feature = "log")]
                log::warn!("Starting with empty storage, can't read {}: {_err}", path.display());
                BTreeMap::new()
            }
        };

        Self { path, items }
    }

    fn read_items(path: &Path) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&self.items)?)?;
        Ok(())
    }
}
