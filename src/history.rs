//! Recently saved prompts.
//!
//! A short most-recent-first list persisted under [`HISTORY_KEY`]. Saving a
//! prompt that is already present moves it to the front instead of adding a
//! second copy.

use crate::storage::{load_history, save_history, KeyValueStore, StorageError, HISTORY_KEY};

/// Maximum number of saved prompts kept.
pub const HISTORY_LIMIT: usize = 10;

/// Saved prompt history backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct History<S: KeyValueStore> {
    store: S,
    entries: Vec<String>,
}

impl<S: KeyValueStore> History<S> {
    /// Load the history from `store`. Unreadable data starts an empty history.
    pub fn load(store: S) -> Self {
        let mut entries = load_history(&store);
        entries.truncate(HISTORY_LIMIT);
        Self { store, entries }
    }

    /// Saved prompts, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Save `prompt` at the front and persist.
    ///
    /// Blank prompts are ignored and return `Ok(false)`.
    pub fn save(&mut self, prompt: &str) -> Result<bool, StorageError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Ok(false);
        }

        // Reload so entries written by another handle are not lost.
        let mut entries = load_history(&self.store);
        entries.retain(|e| e != prompt);
        entries.insert(0, prompt.to_string());
        entries.truncate(HISTORY_LIMIT);

        save_history(&self.store, &entries)?;
        log::debug!("saved prompt to history ({} entries)", entries.len());
        self.entries = entries;
        Ok(true)
    }

    /// An editable copy of the entry at `index`.
    pub fn restore(&self, index: usize) -> Option<String> {
        self.get(index).map(str::to_string)
    }

    /// Remove every entry and persist.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(HISTORY_KEY)?;
        self.entries.clear();
        Ok(())
    }
}
