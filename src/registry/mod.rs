//! Festival registry and its read-only snapshot.
//!
//! This module provides:
//! - A unified `Registry` trait for id-keyed lookups
//! - `FestivalRegistry` for adding, replacing and removing user festivals
//!   through a persistence port
//! - `FestivalCatalog`, the merged built-in + user snapshot the composer reads
//!
//! Unresolvable festival references never fail: they resolve to the default
//! festival with [`FestivalSource::Fallback`].

mod catalog;
mod festival;
mod traits;

// Re-export all public items from submodules
pub use catalog::{FestivalCatalog, FestivalSource, ResolvedFestival};
pub use festival::{slugify, FestivalError, FestivalRegistry, Upserted};
pub use traits::Registry;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FestivalDraft;
    use crate::storage::MemoryStore;

    #[test]
    fn test_registry_and_snapshot_agree() {
        let mut registry = FestivalRegistry::new(MemoryStore::new());
        registry.upsert(FestivalDraft::new("Pongal")).unwrap();
        registry.upsert(FestivalDraft::new("Onam")).unwrap();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), registry.len());
        let live: Vec<_> = registry.ids().collect();
        let frozen: Vec<_> = snapshot.ids().collect();
        assert_eq!(live, frozen);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut registry = FestivalRegistry::new(MemoryStore::new());
        let before = registry.snapshot();
        registry.upsert(FestivalDraft::new("Pongal")).unwrap();

        assert!(!before.contains("pongal"));
        assert!(registry.snapshot().contains("pongal"));
    }
}
