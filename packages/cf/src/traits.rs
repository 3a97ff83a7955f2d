//! The store verbs.

use crate::{CfDictionary, CfType, OsStatus};

/// The four verbs of a secure-item store.
///
/// This is the lowest-level store interface. Queries and attributes are
/// already-built external dictionaries; results are raw handles. No attribute
/// semantics live at this level.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn SecItemStore>`.
pub trait SecItemStore: Send + Sync {
    /// Add an item described by `attributes`.
    ///
    /// Fails with [`OsStatus::DUPLICATE_ITEM`] when an item with the same
    /// primary attributes already exists.
    fn item_add(&mut self, attributes: &CfDictionary) -> Result<(), OsStatus>;

    /// Apply `changes` to every item matching `query`.
    ///
    /// Fails with [`OsStatus::ITEM_NOT_FOUND`] when nothing matches.
    fn item_update(&mut self, query: &CfDictionary, changes: &CfDictionary)
        -> Result<(), OsStatus>;

    /// Remove every item matching `query`.
    ///
    /// Fails with [`OsStatus::ITEM_NOT_FOUND`] when nothing matches.
    fn item_delete(&mut self, query: &CfDictionary) -> Result<(), OsStatus>;

    /// Search for items matching `query`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(handle))` - The response; its shape depends on the match
    ///   limit and return flags in `query`. The caller owns the handle.
    /// * `Ok(None)` - The query succeeded but requested no payload.
    /// * `Err(OsStatus::ITEM_NOT_FOUND)` - Nothing matched.
    fn item_copy_matching(&mut self, query: &CfDictionary) -> Result<Option<CfType>, OsStatus>;
}

// Blanket implementations for references and boxes

impl<T: SecItemStore + ?Sized> SecItemStore for &mut T {
    fn item_add(&mut self, attributes: &CfDictionary) -> Result<(), OsStatus> {
        (*self).item_add(attributes)
    }

    fn item_update(
        &mut self,
        query: &CfDictionary,
        changes: &CfDictionary,
    ) -> Result<(), OsStatus> {
        (*self).item_update(query, changes)
    }

    fn item_delete(&mut self, query: &CfDictionary) -> Result<(), OsStatus> {
        (*self).item_delete(query)
    }

    fn item_copy_matching(&mut self, query: &CfDictionary) -> Result<Option<CfType>, OsStatus> {
        (*self).item_copy_matching(query)
    }
}

impl<T: SecItemStore + ?Sized> SecItemStore for Box<T> {
    fn item_add(&mut self, attributes: &CfDictionary) -> Result<(), OsStatus> {
        self.as_mut().item_add(attributes)
    }

    fn item_update(
        &mut self,
        query: &CfDictionary,
        changes: &CfDictionary,
    ) -> Result<(), OsStatus> {
        self.as_mut().item_update(query, changes)
    }

    fn item_delete(&mut self, query: &CfDictionary) -> Result<(), OsStatus> {
        self.as_mut().item_delete(query)
    }

    fn item_copy_matching(&mut self, query: &CfDictionary) -> Result<Option<CfType>, OsStatus> {
        self.as_mut().item_copy_matching(query)
    }
}
