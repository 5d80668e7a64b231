//! LayoutSelection: the user's chosen room layout and its persistence.
//!
//! The active layout starts from the last explicitly saved choice, or from
//! the analysis' suggestion when nothing was saved.  After that it changes
//! only through [`LayoutSelection::select`], which is purely in-memory.
//! [`LayoutSelection::save`] is the only operation that touches durable
//! storage.
//!
//! # Failure semantics
//!
//! Storage is a convenience, never a requirement.  Read and write failures
//! are logged at `warn` and otherwise ignored, so the session keeps working
//! with its in-memory state.  A persisted value that is not a known layout
//! tag is treated as if nothing was saved.
//!
//! # Concurrency
//!
//! The persisted slot is a single global key with last-writer-wins
//! semantics.  Two sessions saving at once simply overwrite each other.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use seatplan_core::LayoutFormat;
use thiserror::Error;
use tracing::{info, warn};

/// Error type for layout store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform state directory could not be determined.
    #[error("could not determine platform state directory")]
    NoPlatformStateDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing layout store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored TOML could not be parsed.
    #[error("failed to parse layout store: {0}")]
    Parse(#[from] toml::de::Error),

    /// The store could not be serialized to TOML.
    #[error("failed to serialize layout store: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The backing store refused the operation.
    #[error("layout store unavailable: {0}")]
    Unavailable(String),
}

/// Durable key-value slot holding the saved layout tag.
///
/// Infrastructure implementations write a TOML file; tests use an in-memory
/// store or a mock.
#[cfg_attr(test, mockall::automock)]
pub trait LayoutStore: Send + Sync {
    /// Reads the saved tag, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Overwrites the saved tag.
    fn save(&self, tag: &str) -> Result<(), StoreError>;
}

/// Callback invoked with the new layout after the user changes it.
pub type LayoutListener = Box<dyn Fn(LayoutFormat) + Send + Sync>;

/// Tracks the active layout, independent of the analysis' suggestion.
pub struct LayoutSelection {
    store: Arc<dyn LayoutStore>,
    suggested: LayoutFormat,
    current: LayoutFormat,
    listeners: Vec<LayoutListener>,
}

impl LayoutSelection {
    /// Initialises the selection from the store, falling back to `suggested`.
    pub fn load_initial(store: Arc<dyn LayoutStore>, suggested: LayoutFormat) -> Self {
        let current = match store.load() {
            Ok(Some(tag)) => match tag.parse::<LayoutFormat>() {
                Ok(saved) => {
                    info!(layout = %saved, "restored saved layout");
                    saved
                }
                Err(e) => {
                    warn!("ignoring saved layout: {e}");
                    suggested
                }
            },
            Ok(None) => suggested,
            Err(e) => {
                warn!("failed to read saved layout, using suggestion: {e}");
                suggested
            }
        };

        Self {
            store,
            suggested,
            current,
            listeners: Vec::new(),
        }
    }

    /// Returns the active layout.
    pub fn current(&self) -> LayoutFormat {
        self.current
    }

    /// Returns the layout the analysis suggested.
    pub fn suggested(&self) -> LayoutFormat {
        self.suggested
    }

    /// Makes `format` the active layout.  Does not persist.
    ///
    /// Listeners are notified only when the active layout actually changes.
    pub fn select(&mut self, format: LayoutFormat) {
        if format == self.current {
            return;
        }
        info!(from = %self.current, to = %format, "layout selected");
        self.current = format;
        for listener in &self.listeners {
            listener(format);
        }
    }

    /// Persists the active layout, overwriting any earlier save.
    ///
    /// Returns `true` when the store accepted the write.  A failed write is
    /// logged and leaves the in-memory selection untouched.
    pub fn save(&self) -> bool {
        match self.store.save(self.current.as_str()) {
            Ok(()) => {
                info!(layout = %self.current, "layout saved");
                true
            }
            Err(e) => {
                warn!(layout = %self.current, "failed to save layout: {e}");
                false
            }
        }
    }

    /// Registers a callback fired on every layout change.
    pub fn subscribe(&mut self, listener: impl Fn(LayoutFormat) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl fmt::Debug for LayoutSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutSelection")
            .field("suggested", &self.suggested)
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn mock_with_saved(saved: Option<&str>) -> MockLayoutStore {
        let saved = saved.map(str::to_string);
        let mut store = MockLayoutStore::new();
        store.expect_load().returning(move || Ok(saved.clone()));
        store
    }

    /// Records every notified layout.
    fn recorder(selection: &mut LayoutSelection) -> Arc<Mutex<Vec<LayoutFormat>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        selection.subscribe(move |format| sink.lock().unwrap().push(format));
        seen
    }

    // ── load_initial ──────────────────────────────────────────────────────────

    #[test]
    fn test_load_initial_uses_suggestion_when_nothing_saved() {
        let store = Arc::new(mock_with_saved(None));
        let selection = LayoutSelection::load_initial(store, LayoutFormat::UShape);
        assert_eq!(selection.current(), LayoutFormat::UShape);
    }

    #[test]
    fn test_load_initial_prefers_saved_layout() {
        let store = Arc::new(mock_with_saved(Some("buffet")));
        let selection = LayoutSelection::load_initial(store, LayoutFormat::Theater);
        assert_eq!(selection.current(), LayoutFormat::Banquet);
        assert_eq!(selection.suggested(), LayoutFormat::Theater);
    }

    #[test]
    fn test_load_initial_ignores_unknown_saved_tag() {
        let store = Arc::new(mock_with_saved(Some("auditorio")));
        let selection = LayoutSelection::load_initial(store, LayoutFormat::Conference);
        assert_eq!(selection.current(), LayoutFormat::Conference);
    }

    #[test]
    fn test_load_initial_falls_back_when_store_fails() {
        // Arrange
        let mut store = MockLayoutStore::new();
        store
            .expect_load()
            .returning(|| Err(StoreError::Unavailable("storage disabled".to_string())));

        // Act
        let selection = LayoutSelection::load_initial(Arc::new(store), LayoutFormat::TShape);

        // Assert
        assert_eq!(selection.current(), LayoutFormat::TShape);
    }

    // ── select ────────────────────────────────────────────────────────────────

    #[test]
    fn test_select_does_not_touch_storage() {
        // Arrange: save must never be called
        let mut store = mock_with_saved(None);
        store.expect_save().never();
        let mut selection = LayoutSelection::load_initial(Arc::new(store), LayoutFormat::UShape);

        // Act
        selection.select(LayoutFormat::Banquet);

        // Assert
        assert_eq!(selection.current(), LayoutFormat::Banquet);
    }

    #[test]
    fn test_select_notifies_listeners_with_new_layout() {
        let mut selection =
            LayoutSelection::load_initial(Arc::new(mock_with_saved(None)), LayoutFormat::UShape);
        let seen = recorder(&mut selection);

        selection.select(LayoutFormat::HollowSquare);
        selection.select(LayoutFormat::Theater);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![LayoutFormat::HollowSquare, LayoutFormat::Theater]
        );
    }

    #[test]
    fn test_select_same_layout_does_not_notify() {
        let mut selection =
            LayoutSelection::load_initial(Arc::new(mock_with_saved(None)), LayoutFormat::UShape);
        let seen = recorder(&mut selection);

        selection.select(LayoutFormat::UShape);

        assert!(seen.lock().unwrap().is_empty());
    }

    // ── save ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_writes_current_tag() {
        // Arrange
        let mut store = mock_with_saved(None);
        store
            .expect_save()
            .withf(|tag| tag == "recepcao")
            .times(1)
            .returning(|_| Ok(()));
        let mut selection = LayoutSelection::load_initial(Arc::new(store), LayoutFormat::UShape);
        selection.select(LayoutFormat::Reception);

        // Act / Assert
        assert!(selection.save());
    }

    #[test]
    fn test_save_failure_is_swallowed_and_keeps_selection() {
        let mut store = mock_with_saved(None);
        store
            .expect_save()
            .returning(|_| Err(StoreError::Unavailable("quota exceeded".to_string())));
        let mut selection = LayoutSelection::load_initial(Arc::new(store), LayoutFormat::UShape);
        selection.select(LayoutFormat::Classroom);

        assert!(!selection.save());
        assert_eq!(selection.current(), LayoutFormat::Classroom);
    }

    #[test]
    fn test_save_does_not_notify() {
        let mut store = mock_with_saved(None);
        store.expect_save().returning(|_| Ok(()));
        let mut selection = LayoutSelection::load_initial(Arc::new(store), LayoutFormat::UShape);
        let seen = recorder(&mut selection);

        selection.save();

        assert!(seen.lock().unwrap().is_empty());
    }
}
