//! Common trait for registries that store festivals by identifier.

/// Common trait for registries keyed by a string identifier.
///
/// Implemented by both the live [`FestivalRegistry`](super::FestivalRegistry)
/// and its read-only [`FestivalCatalog`](super::FestivalCatalog) snapshot, so
/// lookups read the same either way.
///
/// # Example
///
/// ```
/// use wishcraft::registry::{FestivalCatalog, Registry};
///
/// let catalog = FestivalCatalog::builtin();
/// assert!(catalog.contains("holi"));
/// assert_eq!(catalog.len(), 6);
/// ```
pub trait Registry<V> {
    /// Check if an item with the given id exists in the registry.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Get an item by id.
    ///
    /// Returns `None` if no item with the given id exists.
    fn get(&self, id: &str) -> Option<&V>;

    /// Get the number of items in the registry.
    fn len(&self) -> usize;

    /// Check if the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an iterator over all ids in the registry, in display order.
    fn ids(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}
