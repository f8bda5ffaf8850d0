//! Bevy integration for the reference library.
//!
//! Provides:
//! - `ReferenceLibraryPlugin` — builder-pattern plugin that seeds the
//!   library from settings and inserts it as a Resource
//! - `Resource` impl for [`ReferenceLibrary`]
//!
//! # Example
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_input_library::{LibrarySettings, ReferenceLibrary, ReferenceLibraryPlugin, Tag};
//! use std::sync::Arc;
//!
//! fn main() {
//!     let settings = LibrarySettings::new()
//!         .with_reference(Tag::new("Input.Jump").unwrap(), "input/ia_jump");
//!
//!     App::new()
//!         .add_plugins(
//!             ReferenceLibraryPlugin::new()
//!                 .with_settings(settings)
//!                 .with_resolver(|path: &str| my_loader::load(path)),
//!         )
//!         .add_systems(Update, react_to_library)
//!         .run();
//! }
//!
//! fn react_to_library(library: Res<ReferenceLibrary<Arc<MyAction>>>) {
//!     // look up actions by tag
//! }
//! ```

use std::sync::Arc;

use bevy::prelude::*;

use crate::registry::{ObjectRef, ReferenceLibrary};
use crate::settings::{LibrarySettings, ResolveReference};

// =============================================================================
// Plugin
// =============================================================================

/// Bevy plugin that installs a [`ReferenceLibrary`] as a resource.
///
/// Use the builder pattern to configure:
///
/// ```ignore
/// App::new().add_plugins(
///     ReferenceLibraryPlugin::new()
///         .with_settings(settings)
///         .with_resolver(resolver),
/// )
/// ```
///
/// At build time the plugin constructs an empty library, resolves and
/// registers every configured reference through the resolver, and inserts
/// the result. Collections arriving later go through
/// [`ReferenceLibrary::try_register_collection`] on the live resource.
pub struct ReferenceLibraryPlugin<A> {
    settings: LibrarySettings,
    resolver: Option<Arc<dyn ResolveReference<A> + Send + Sync>>,
}

impl<A> Default for ReferenceLibraryPlugin<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ReferenceLibraryPlugin<A> {
    /// Create a plugin with no settings. The inserted library starts empty.
    pub fn new() -> Self {
        Self {
            settings: LibrarySettings::default(),
            resolver: None,
        }
    }

    /// Set the configuration the library is seeded from.
    pub fn with_settings(mut self, settings: LibrarySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the resolver the configured references are loaded through.
    pub fn with_resolver(
        mut self,
        resolver: impl ResolveReference<A> + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }
}

impl<A: ObjectRef> Plugin for ReferenceLibraryPlugin<A> {
    fn build(&self, app: &mut App) {
        let mut library = ReferenceLibrary::new();
        match &self.resolver {
            Some(resolver) => {
                let registered = library.populate(&self.settings, resolver.as_ref());
                log::info!(
                    "reference library seeded with {registered} of {} configured references",
                    self.settings.references.len()
                );
            }
            None if !self.settings.references.is_empty() => {
                log::warn!(
                    "library settings carry {} references but no resolver was provided",
                    self.settings.references.len()
                );
            }
            None => {}
        }
        app.insert_resource(library);
    }
}

// =============================================================================
// Resource impl for ReferenceLibrary
// =============================================================================

impl<A: ObjectRef> Resource for ReferenceLibrary<A> {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    fn tag(raw: &str) -> Tag {
        Tag::new(raw).unwrap()
    }

    #[test]
    fn plugin_inserts_populated_library() {
        let settings = LibrarySettings::new()
            .with_reference(tag("Input.Jump"), "input/ia_jump")
            .with_reference(tag("Input.Fire"), "input/ia_fire");

        let mut app = App::new();
        app.add_plugins(
            ReferenceLibraryPlugin::new()
                .with_settings(settings)
                .with_resolver(|path: &str| Some(Arc::new(path.to_string()))),
        );

        let library = app.world().resource::<ReferenceLibrary<Arc<String>>>();
        assert_eq!(library.len(), 2);
        assert_eq!(
            library.get(&tag("Input.Jump")).map(|a| a.as_str()),
            Some("input/ia_jump")
        );
    }

    #[test]
    fn plugin_without_settings_inserts_empty_library() {
        let mut app = App::new();
        app.add_plugins(ReferenceLibraryPlugin::<Arc<String>>::new());

        let library = app.world().resource::<ReferenceLibrary<Arc<String>>>();
        assert!(library.is_empty());
    }

    #[test]
    fn live_resource_accepts_collections() {
        use crate::collection::ReferenceCollection;

        let mut app = App::new();
        app.add_plugins(ReferenceLibraryPlugin::<Arc<String>>::new());

        let mut library = app
            .world_mut()
            .resource_mut::<ReferenceLibrary<Arc<String>>>();
        let collection = ReferenceCollection::new("Pack")
            .with(tag("Input.Jump"), Arc::new("IA_Jump".to_string()));
        library.try_register_collection(collection).unwrap();

        let library = app.world().resource::<ReferenceLibrary<Arc<String>>>();
        assert!(library.has_collection("Pack"));
        assert!(library.contains(&tag("Input.Jump")));
    }
}
