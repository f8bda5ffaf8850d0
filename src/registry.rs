//! Object reference library — conflict-checked, event-notifying tag→object map.
//!
//! Provides:
//! - Unique-key registration with duplicate rejection (never silent overwrite)
//! - All-or-nothing batch registration of named [`ReferenceCollection`]s
//! - Synchronous "added"/"removed" notifications, observers in registration order
//! - O(1) lookup by [`Tag`]
//!
//! The library is single-threaded cooperative state: all mutation and
//! notification happen on the calling thread, with no internal locking.
//! Callers invoking it from multiple threads must serialize access
//! externally.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Weak};

use thiserror::Error;

use crate::collection::ReferenceCollection;
use crate::tag::Tag;

// =============================================================================
// Object references
// =============================================================================

/// A non-owning handle to an externally-owned object.
///
/// The library stores and hands back these handles without interpreting
/// them; the asset-loading collaborator owns the referenced object's
/// lifetime and is expected to unregister before releasing it.
///
/// Implementations are provided for `Arc<T>` (always valid while held) and
/// `Weak<T>` (valid while the owner keeps the object alive).
pub trait ObjectRef: Clone + Send + Sync + 'static {
    /// Whether the referenced object is still alive.
    fn is_valid(&self) -> bool {
        true
    }
}

impl<T: ?Sized + Send + Sync + 'static> ObjectRef for Arc<T> {}

impl<T: ?Sized + Send + Sync + 'static> ObjectRef for Weak<T> {
    fn is_valid(&self) -> bool {
        self.strong_count() > 0
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Rejection reasons for library mutations.
///
/// Every variant is a caller-side mistake in correct usage; the library
/// additionally logs them at error level. Removal of absent tags or
/// collections is not an error and is reported through `Option`/`bool`
/// returns instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("tag '{tag}' already has a registered reference")]
    TagInUse { tag: Tag },
    #[error("collection '{name}' has already been registered")]
    CollectionInUse { name: String },
    #[error("collection '{name}' conflicts on tag '{tag}'")]
    CollectionConflict { name: String, tag: Tag },
    #[error("reference for tag '{tag}' is not valid")]
    InvalidReference { tag: Tag },
}

// =============================================================================
// Library
// =============================================================================

type Observer<A> = Box<dyn Fn(&Tag, &A) + Send + Sync>;

/// Registry mapping [`Tag`]s to object references, with change notification.
///
/// Keys are unique: at most one reference per tag at any time. A key only
/// ever moves absent→present through [`try_register`](Self::try_register)
/// and present→absent through [`unregister`](Self::unregister); duplicate
/// registration is always rejected, never overwritten.
///
/// ```
/// use bevy_input_library::{ReferenceLibrary, Tag};
/// use std::sync::Arc;
///
/// let mut library = ReferenceLibrary::new();
/// let jump = Tag::new("Input.Jump").unwrap();
/// library.try_register(jump.clone(), Arc::new("IA_Jump")).unwrap();
/// assert!(library.get(&jump).is_some());
/// ```
pub struct ReferenceLibrary<A> {
    entries: HashMap<Tag, A>,
    /// Active batch contributions, keyed by collection name.
    collections: HashMap<String, ReferenceCollection<A>>,
    on_added: Vec<Observer<A>>,
    on_removed: Vec<Observer<A>>,
}

impl<A> Default for ReferenceLibrary<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ReferenceLibrary<A> {
    /// Create an empty library.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            collections: HashMap::new(),
            on_added: Vec::new(),
            on_removed: Vec::new(),
        }
    }

    /// Look up the reference registered under `tag`.
    #[inline]
    pub fn get(&self, tag: &Tag) -> Option<&A> {
        self.entries.get(tag)
    }

    /// Check if a reference is registered under `tag`.
    #[inline]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.entries.contains_key(tag)
    }

    /// Number of registered references.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all registered `(tag, reference)` pairs (unordered).
    pub fn entries(&self) -> impl Iterator<Item = (&Tag, &A)> {
        self.entries.iter()
    }

    /// Names of the currently active collections (unordered).
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Check if a collection is in the active set.
    #[inline]
    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Subscribe to "entry added" notifications.
    ///
    /// Observers live as long as the library and are invoked synchronously,
    /// on the mutating thread, in registration order.
    pub fn on_added(&mut self, observer: impl Fn(&Tag, &A) + Send + Sync + 'static) {
        self.on_added.push(Box::new(observer));
    }

    /// Subscribe to "entry removed" notifications.
    ///
    /// Same delivery contract as [`on_added`](Self::on_added).
    pub fn on_removed(&mut self, observer: impl Fn(&Tag, &A) + Send + Sync + 'static) {
        self.on_removed.push(Box::new(observer));
    }
}

impl<A: ObjectRef> ReferenceLibrary<A> {
    /// Register a reference under `tag`.
    ///
    /// Fires exactly one "added" notification on success. Fails without
    /// mutation or notification when the reference is invalid or the tag is
    /// already in use; the duplicate-tag case is a programming error in
    /// correct usage and is logged at error level.
    pub fn try_register(&mut self, tag: Tag, object: A) -> Result<(), LibraryError> {
        if !object.is_valid() {
            log::error!("refusing to register dead reference for tag [{tag}]");
            return Err(LibraryError::InvalidReference { tag });
        }
        if self.entries.contains_key(&tag) {
            log::error!("tag [{tag}] already has a registered reference; rejecting the new one");
            return Err(LibraryError::TagInUse { tag });
        }

        self.entries.insert(tag.clone(), object.clone());
        for observer in &self.on_added {
            observer(&tag, &object);
        }
        log::debug!("registered reference under tag [{tag}]");
        Ok(())
    }

    /// Remove the reference registered under `tag`, returning it.
    ///
    /// Absence is a normal outcome, not an error: returns `None` with no
    /// notification. On removal, fires exactly one "removed" notification.
    pub fn unregister(&mut self, tag: &Tag) -> Option<A> {
        let Some(object) = self.entries.remove(tag) else {
            log::trace!("no reference registered under tag [{tag}]; nothing to remove");
            return None;
        };
        for observer in &self.on_removed {
            observer(tag, &object);
        }
        log::debug!("removed reference under tag [{tag}]");
        Some(object)
    }

    /// Register a whole collection, all-or-nothing.
    ///
    /// Validates every pair before touching the map: the collection's name
    /// must not already be active, no tag may collide with an existing
    /// entry or repeat within the batch, and every reference must be valid.
    /// A single conflict aborts the entire batch with zero mutation, naming
    /// the culprit tag. On success each pair fires its own "added"
    /// notification, in the collection's insertion order.
    pub fn try_register_collection(
        &mut self,
        collection: ReferenceCollection<A>,
    ) -> Result<(), LibraryError> {
        let name = collection.name().to_string();
        if self.collections.contains_key(&name) {
            log::error!("collection [{name}] has already been registered");
            return Err(LibraryError::CollectionInUse { name });
        }

        // Validate phase: no partial mutation may survive a conflict.
        let mut batch_tags = HashSet::new();
        for (tag, object) in collection.entries() {
            if self.entries.contains_key(tag) {
                log::error!(
                    "collection [{name}] collides with an existing reference; culprit tag [{tag}]"
                );
                return Err(LibraryError::CollectionConflict {
                    name,
                    tag: tag.clone(),
                });
            }
            if !batch_tags.insert(tag) {
                log::error!("collection [{name}] lists tag [{tag}] more than once");
                return Err(LibraryError::CollectionConflict {
                    name,
                    tag: tag.clone(),
                });
            }
            if !object.is_valid() {
                log::error!("collection [{name}] carries a dead reference for tag [{tag}]");
                return Err(LibraryError::InvalidReference { tag: tag.clone() });
            }
        }

        // Commit phase: every pair was validated, so each registration must
        // succeed.
        log::info!(
            "adding collection [{name}] with {} references",
            collection.len()
        );
        self.collections.insert(name, collection.clone());
        for (tag, object) in collection.into_entries() {
            let registered = self.try_register(tag, object);
            debug_assert!(registered.is_ok(), "validated pair failed to register");
        }
        Ok(())
    }

    /// Remove an active collection and all of its references.
    ///
    /// Returns `false` when no collection with that name is active (normal
    /// outcome, nothing removed). Otherwise removes every pair the
    /// collection contributed, firing one "removed" notification each, and
    /// returns `true`.
    pub fn unregister_collection(&mut self, name: &str) -> bool {
        let Some(collection) = self.collections.remove(name) else {
            log::debug!("collection [{name}] is not active; nothing to remove");
            return false;
        };

        log::info!(
            "removing collection [{name}] with {} references",
            collection.len()
        );
        for (tag, _) in collection.into_entries() {
            // A registered collection's tags must still be present: no
            // other path is allowed to remove them independently.
            let removed = self.unregister(&tag);
            debug_assert!(removed.is_some(), "collection tag [{tag}] was already gone");
        }
        true
    }
}

impl<A: fmt::Debug> fmt::Debug for ReferenceLibrary<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceLibrary")
            .field("entries", &self.entries)
            .field("collections", &self.collections.keys().collect::<Vec<_>>())
            .field("on_added", &self.on_added.len())
            .field("on_removed", &self.on_removed.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
