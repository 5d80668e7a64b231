//! [`LayoutStore`] adapters.
//!
//! [`TomlFileLayoutStore`] keeps the saved layout in a small key-value TOML
//! file under the fixed key [`SAVED_LAYOUT_KEY`]:
//!
//! ```toml
//! saved_layout = "buffet"
//! ```
//!
//! A save rewrites the whole file but keeps any other keys it finds there,
//! so the file can be shared with future settings.  Reads and writes are
//! single synchronous file accesses; concurrent writers are last-writer-wins.
//!
//! [`MemoryLayoutStore`] is the process-local variant used when no state
//! file is wanted, and in tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::application::layout_selection::{LayoutStore, StoreError};

/// Key under which the saved layout tag is stored.
pub const SAVED_LAYOUT_KEY: &str = "saved_layout";

/// Layout store backed by a TOML key-value file.
#[derive(Debug, Clone)]
pub struct TomlFileLayoutStore {
    path: PathBuf,
}

impl TomlFileLayoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole table, empty when the file does not exist yet.
    fn read_table(&self) -> Result<toml::Table, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.parse::<toml::Table>()?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_table(&self, table: &toml::Table) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(table)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl LayoutStore for TomlFileLayoutStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let table = self.read_table()?;
        let value = table
            .get(SAVED_LAYOUT_KEY)
            .and_then(|v| v.as_str())
            .map(str::to_string);
        debug!(path = %self.path.display(), saved = ?value, "read layout store");
        Ok(value)
    }

    fn save(&self, tag: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every future save.
        let mut table = self.read_table().or_else(|e| match e {
            StoreError::Parse(_) => Ok(toml::Table::new()),
            other => Err(other),
        })?;
        table.insert(
            SAVED_LAYOUT_KEY.to_string(),
            toml::Value::String(tag.to_string()),
        );
        self.write_table(&table)
    }
}

/// Layout store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryLayoutStore {
    saved: Mutex<Option<String>>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `tag`.
    pub fn with_saved(tag: impl Into<String>) -> Self {
        Self {
            saved: Mutex::new(Some(tag.into())),
        }
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn save(&self, tag: &str) -> Result<(), StoreError> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *saved = Some(tag.to_string());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
