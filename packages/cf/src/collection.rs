//! Container handles: dictionaries and arrays.
//!
//! Containers retain every handle placed into them. The caller keeps its own
//! handles and may drop them as soon as the container is built.

use std::sync::Arc;

use crate::{CfString, CfType};

/// Immutable key/value collection.
///
/// Keys are compared by value. Building from pairs with a repeated key keeps
/// the last value for that key.
#[derive(Clone, Debug)]
pub struct CfDictionary(Arc<Vec<(CfType, CfType)>>);

impl CfDictionary {
    /// A dictionary with no entries. Never a null handle.
    pub fn empty() -> Self {
        CfDictionary(Arc::new(Vec::new()))
    }

    /// Create a dictionary, retaining every key and value.
    pub fn from_pairs(pairs: &[(CfType, CfType)]) -> Self {
        let mut entries: Vec<(CfType, CfType)> = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            match entries.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value.clone(),
                None => entries.push((key.clone(), value.clone())),
            }
        }
        CfDictionary(Arc::new(entries))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a value. The returned handle is borrowed from the dictionary.
    pub fn get(&self, key: &CfType) -> Option<&CfType> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a value by a string key.
    pub fn find(&self, key: &CfString) -> Option<&CfType> {
        self.0
            .iter()
            .find(|(k, _)| k.as_string() == Some(key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &CfString) -> bool {
        self.find(key).is_some()
    }

    /// Iterate entries. Handles are borrowed; clone to keep them.
    pub fn iter(&self) -> impl Iterator<Item = (&CfType, &CfType)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn retain_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn same_object(&self, other: &CfDictionary) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for CfDictionary {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).map(|o| o == v).unwrap_or(false))
    }
}

/// Immutable ordered sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct CfArray(Arc<Vec<CfType>>);

impl CfArray {
    pub fn empty() -> Self {
        CfArray(Arc::new(Vec::new()))
    }

    /// Create an array, retaining every element.
    pub fn from_values(values: &[CfType]) -> Self {
        CfArray(Arc::new(values.to_vec()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CfType> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CfType> {
        self.0.iter()
    }

    pub fn retain_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    pub fn same_object(&self, other: &CfArray) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
