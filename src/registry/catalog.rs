//! Read-only merged view of built-in and user festivals.

use crate::festivals::{self, DEFAULT_FESTIVAL_ID};
use crate::models::Festival;

use super::traits::Registry;

/// Indicates where a resolved festival came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FestivalSource {
    /// Shipped with the crate
    Builtin,
    /// Created by the user at runtime
    User,
    /// The reference was unresolvable and the default festival was used
    Fallback,
}

/// A festival picked for composition, with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFestival {
    pub festival: Festival,
    pub source: FestivalSource,
}

/// Snapshot of every known festival: built-ins first, then user festivals.
///
/// Resolvers and the composer read this snapshot only. Identifiers are unique
/// across the merged list; a user record that reuses a built-in id is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct FestivalCatalog {
    festivals: Vec<Festival>,
    builtin_count: usize,
}

impl Default for FestivalCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FestivalCatalog {
    /// Catalog holding the built-in festivals only.
    pub fn builtin() -> Self {
        let festivals = festivals::builtins();
        let builtin_count = festivals.len();
        Self { festivals, builtin_count }
    }

    /// Catalog of built-ins followed by `user` festivals, in the given order.
    pub fn with_user(user: impl IntoIterator<Item = Festival>) -> Self {
        let mut catalog = Self::builtin();
        for festival in user {
            if catalog.get(&festival.id).is_some() {
                log::warn!("skipping festival with duplicate id '{}'", festival.id);
                continue;
            }
            catalog.festivals.push(festival);
        }
        catalog
    }

    /// All festivals in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Festival> {
        self.festivals.iter()
    }

    pub fn builtin_festivals(&self) -> &[Festival] {
        &self.festivals[..self.builtin_count]
    }

    pub fn user_festivals(&self) -> &[Festival] {
        &self.festivals[self.builtin_count..]
    }

    /// Provenance of a festival id, `None` if unknown.
    pub fn source_of(&self, id: &str) -> Option<FestivalSource> {
        let index = self.festivals.iter().position(|f| f.id == id)?;
        if index < self.builtin_count {
            Some(FestivalSource::Builtin)
        } else {
            Some(FestivalSource::User)
        }
    }

    /// Resolve `id`, substituting the default festival when it is unknown.
    pub fn resolve(&self, id: &str) -> ResolvedFestival {
        match (self.get(id), self.source_of(id)) {
            (Some(festival), Some(source)) => {
                ResolvedFestival { festival: festival.clone(), source }
            }
            _ => {
                log::debug!("festival '{}' not found, using '{}'", id, DEFAULT_FESTIVAL_ID);
                let festival = self
                    .get(DEFAULT_FESTIVAL_ID)
                    .cloned()
                    .unwrap_or_else(festivals::default_festival);
                ResolvedFestival { festival, source: FestivalSource::Fallback }
            }
        }
    }
}

impl Registry<Festival> for FestivalCatalog {
    fn get(&self, id: &str) -> Option<&Festival> {
        self.festivals.iter().find(|f| f.id == id)
    }

    fn len(&self) -> usize {
        self.festivals.len()
    }

    fn ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.festivals.iter().map(|f| f.id.as_str()))
    }
}
