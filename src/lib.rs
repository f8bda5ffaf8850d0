//! # Tag-Addressed Object Reference Library (bevy-input-library)
//!
//! A process-wide registry mapping hierarchical [`Tag`]s to input-action
//! asset references, with conflict-checked registration, all-or-nothing
//! plugin collections, and synchronous change notification. Inspired by
//! UE5-style gameplay-tag input setup.
//!
//! ## Design
//!
//! - **Unique keys.** At most one reference per tag; duplicate registration
//!   is rejected, never overwritten.
//! - **Non-owning references.** The library stores [`ObjectRef`] handles;
//!   the asset loader owns the referenced objects and unregisters before
//!   releasing them.
//! - **Batch contributions.** A [`ReferenceCollection`] registers as one
//!   unit: one colliding pair aborts the whole batch with zero mutation.
//! - **Observers.** "Added"/"removed" callbacks fire synchronously on the
//!   mutating thread, in registration order.
//!
//! ## Seeding from configuration
//!
//! ```ignore
//! use bevy_input_library::{LibrarySettings, ReferenceLibrary, Tag};
//!
//! let settings: LibrarySettings = serde_json::from_str(config_text)?;
//! let mut library = ReferenceLibrary::new();
//! library.populate(&settings, &|path: &str| loader.load(path));
//! ```
//!
//! For host integration, [`ReferenceLibraryPlugin`] installs the library as
//! a Bevy resource.

pub mod bevy;
pub mod collection;
pub mod registry;
pub mod settings;
pub mod tag;

pub use self::bevy::ReferenceLibraryPlugin;
pub use collection::ReferenceCollection;
pub use registry::{LibraryError, ObjectRef, ReferenceLibrary};
pub use settings::{LibrarySettings, ReferenceEntry, ResolveReference};
pub use tag::{Tag, TagError};
