//! Festival registry backed by a persistence port.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::festivals;
use crate::models::{Festival, FestivalDraft, SelectionState};
use crate::storage::{load_user_festivals, save_user_festivals, KeyValueStore, StorageError};

use super::catalog::FestivalCatalog;
use super::traits::Registry;

/// Error when adding or removing a user festival.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FestivalError {
    /// Draft has no display label
    #[error("Please provide a festival name")]
    MissingLabel,
    /// Neither an explicit id was given nor could one be derived from the label
    #[error("Cannot derive a festival id from '{0}'")]
    EmptyId(String),
    /// User festival would shadow a built-in one
    #[error("Festival id '{0}' is reserved by a built-in festival")]
    BuiltinConflict(String),
    /// Built-in festivals cannot be removed
    #[error("Built-in festival '{0}' cannot be removed")]
    BuiltinImmutable(String),
    /// Persisting the change failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What an upsert did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    /// A new festival was added at the front of the user list
    Inserted(String),
    /// An existing user festival with this id was replaced in place
    Replaced(String),
}

impl Upserted {
    pub fn id(&self) -> &str {
        match self {
            Upserted::Inserted(id) | Upserted::Replaced(id) => id,
        }
    }
}

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern is valid"))
}

/// Derive a festival id from a display label.
///
/// Lower-cases, replaces each run of characters outside ASCII `a-z0-9` with a
/// single hyphen, and trims hyphens from both ends: `"Makar  Sankranti!"`
/// becomes `"makar-sankranti"`. A label with no ASCII letters or digits
/// yields an empty id.
pub fn slugify(label: &str) -> String {
    let lowered = label.to_lowercase();
    separator_runs().replace_all(&lowered, "-").trim_matches('-').to_string()
}

/// Registry of built-in and user-defined festivals.
///
/// User festivals persist through the injected [`KeyValueStore`]. Every
/// mutation reloads the stored list, changes it in memory and writes the whole
/// list back (last writer wins).
#[derive(Debug)]
pub struct FestivalRegistry<S: KeyValueStore> {
    store: S,
    builtins: Vec<Festival>,
    user: Vec<Festival>,
}

impl<S: KeyValueStore> FestivalRegistry<S> {
    /// Create a registry and load user festivals from `store`.
    pub fn new(store: S) -> Self {
        let user = load_user_festivals(&store);
        log::debug!("loaded {} user festivals", user.len());
        Self { store, builtins: festivals::builtins(), user }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-read user festivals from the store.
    pub fn reload(&mut self) {
        self.user = load_user_festivals(&self.store);
    }

    /// User festivals, most recently added first.
    pub fn user_festivals(&self) -> &[Festival] {
        &self.user
    }

    /// Merged snapshot for resolvers and the composer.
    pub fn snapshot(&self) -> FestivalCatalog {
        FestivalCatalog::with_user(self.user.iter().cloned())
    }

    /// Add a festival, or replace the user festival with the same id.
    pub fn upsert(&mut self, draft: FestivalDraft) -> Result<Upserted, FestivalError> {
        if draft.label.trim().is_empty() {
            return Err(FestivalError::MissingLabel);
        }

        let id = match draft.id.as_deref().map(str::trim) {
            Some(explicit) if !explicit.is_empty() => explicit.to_string(),
            _ => slugify(&draft.label),
        };
        if id.is_empty() {
            return Err(FestivalError::EmptyId(draft.label));
        }
        if festivals::is_builtin(&id) {
            return Err(FestivalError::BuiltinConflict(id));
        }

        let festival = draft.into_festival(id.clone());

        let mut user = load_user_festivals(&self.store);
        let outcome = match user.iter().position(|f| f.id == id) {
            Some(index) => {
                user[index] = festival;
                Upserted::Replaced(id)
            }
            None => {
                user.insert(0, festival);
                Upserted::Inserted(id)
            }
        };
        save_user_festivals(&self.store, &user)?;
        self.user = user;

        log::debug!("festival upsert: {:?}", outcome);
        Ok(outcome)
    }

    /// Remove a user festival. Returns `false` if no such festival existed.
    pub fn remove(&mut self, id: &str) -> Result<bool, FestivalError> {
        if festivals::is_builtin(id) {
            return Err(FestivalError::BuiltinImmutable(id.to_string()));
        }

        let mut user = load_user_festivals(&self.store);
        let before = user.len();
        user.retain(|f| f.id != id);
        let removed = user.len() != before;

        if removed {
            save_user_festivals(&self.store, &user)?;
            log::debug!("removed festival '{}'", id);
        }
        self.user = user;
        Ok(removed)
    }

    /// Remove a festival and move `selection` off it if it was selected.
    pub fn remove_selected(
        &mut self,
        id: &str,
        selection: &mut SelectionState,
    ) -> Result<bool, FestivalError> {
        let removed = self.remove(id)?;
        if removed {
            selection.release_festival(id);
        }
        Ok(removed)
    }
}

impl<S: KeyValueStore> Registry<Festival> for FestivalRegistry<S> {
    fn get(&self, id: &str) -> Option<&Festival> {
        self.builtins.iter().chain(self.user.iter()).find(|f| f.id == id)
    }

    fn len(&self) -> usize {
        self.builtins.len() + self.user.len()
    }

    fn ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.builtins.iter().chain(self.user.iter()).map(|f| f.id.as_str()))
    }
}
