//! Named batch contributions — bundles of tag→object pairs added as one unit.
//!
//! A [`ReferenceCollection`] is how an externally-loaded content pack (a
//! plugin) contributes a set of references to the library. The whole bundle
//! is registered and unregistered atomically; the library tracks active
//! collections by name.

use crate::tag::Tag;

/// A named set of `(Tag, object)` pairs contributed as one unit.
///
/// ```
/// use bevy_input_library::{ReferenceCollection, Tag};
/// use std::sync::Arc;
///
/// let collection = ReferenceCollection::new("CombatPack")
///     .with(Tag::new("Input.Attack").unwrap(), Arc::new(1u32))
///     .with(Tag::new("Input.Block").unwrap(), Arc::new(2u32));
/// assert_eq!(collection.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceCollection<A> {
    name: String,
    entries: Vec<(Tag, A)>,
}

impl<A> ReferenceCollection<A> {
    /// Create an empty collection. The name is its identity in the library's
    /// active-collections set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builder method: add a pair and return self.
    pub fn with(mut self, tag: Tag, object: A) -> Self {
        self.entries.push((tag, object));
        self
    }

    /// Add a pair to the collection.
    pub fn push(&mut self, tag: Tag, object: A) {
        self.entries.push((tag, object));
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All pairs, in insertion order.
    #[inline]
    pub fn entries(&self) -> &[(Tag, A)] {
        &self.entries
    }

    /// Consume the collection, yielding its pairs in insertion order.
    pub fn into_entries(self) -> Vec<(Tag, A)> {
        self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
