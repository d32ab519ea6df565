//! Persistent plugin data storage.
//!
//! The host owns where plugin data lives; the plugin sees only the
//! [`DataStore`] contract: load the previously persisted JSON object, or
//! save a new one wholesale. `FileStore` is the file-backed default used
//! by the demo harness; `MemoryStore` backs the tests.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// The storage backend supplied by the host.
///
/// Persistence is the plugin's only asynchronous operation: saves are
/// awaited by the caller but carry no cancellation path or timeout.
#[async_trait(?Send)]
pub trait DataStore {
    /// Load previously persisted plugin data.
    ///
    /// Returns `None` if nothing has been saved yet.
    async fn load(&self) -> Result<Option<Value>>;

    /// Persist the full plugin data object, replacing any prior value.
    async fn save(&self, data: &Value) -> Result<()>;
}

/// File-backed storage keeping a single `data.json`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at the default location,
    /// `<data dir>/lazymark/data.json`.
    pub fn new() -> io::Result<Self> {
        let base_dir = dirs::data_local_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "No local data directory available")
        })?;

        Ok(Self {
            path: base_dir.join("lazymark").join("data.json"),
        })
    }

    /// Create a store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait(?Send)]
impl DataStore for FileStore {
    async fn load(&self) -> Result<Option<Value>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn save(&self, data: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), "Plugin data saved");
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral hosting.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RefCell<Option<Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with persisted data.
    pub fn with_data(data: Value) -> Self {
        Self {
            data: RefCell::new(Some(data)),
        }
    }

    /// The currently persisted value, if any.
    pub fn data(&self) -> Option<Value> {
        self.data.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DataStore for MemoryStore {
    async fn load(&self) -> Result<Option<Value>> {
        Ok(self.data.borrow().clone())
    }

    async fn save(&self, data: &Value) -> Result<()> {
        *self.data.borrow_mut() = Some(data.clone());
        Ok(())
    }
}
