//! Configuration source — ordered tag→path references resolved at startup.
//!
//! [`LibrarySettings`] is the project-level list of references the library
//! is seeded with. The library never loads anything itself: each configured
//! path goes through a [`ResolveReference`] implementation supplied by the
//! owning asset loader, synchronously, in declaration order.

use serde::{Deserialize, Serialize};

use crate::registry::{ObjectRef, ReferenceLibrary};
use crate::tag::Tag;

/// One configured reference: a tag and the loader path it resolves through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub tag: Tag,
    pub path: String,
}

/// Startup configuration for a [`ReferenceLibrary`].
///
/// ```
/// use bevy_input_library::LibrarySettings;
///
/// let settings: LibrarySettings = serde_json::from_str(
///     r#"{ "references": [ { "tag": "Input.Jump", "path": "input/ia_jump" } ] }"#,
/// ).unwrap();
/// assert_eq!(settings.references.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Ordered references; registration happens in declaration order.
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
}

impl LibrarySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: append a reference and return self.
    pub fn with_reference(mut self, tag: Tag, path: impl Into<String>) -> Self {
        self.references.push(ReferenceEntry {
            tag,
            path: path.into(),
        });
        self
    }
}

/// Synchronous resolve boundary supplied by the owning asset loader.
///
/// Implemented for closures, so a plain `|path| ...` works wherever a
/// resolver is expected.
pub trait ResolveReference<A> {
    /// Resolve a loader path to a live handle, or `None` when loading
    /// failed. Load failures are the loader's to report; the library only
    /// skips the entry.
    fn resolve(&self, path: &str) -> Option<A>;
}

impl<A, F> ResolveReference<A> for F
where
    F: Fn(&str) -> Option<A>,
{
    fn resolve(&self, path: &str) -> Option<A> {
        self(path)
    }
}

impl<A: ObjectRef> ReferenceLibrary<A> {
    /// Resolve and register every configured reference, in declaration
    /// order. Returns how many entries made it into the library.
    ///
    /// Entries that fail to resolve are skipped with an error log; entries
    /// that conflict are rejected by [`try_register`](Self::try_register)
    /// with its usual handling.
    pub fn populate(
        &mut self,
        settings: &LibrarySettings,
        resolver: &dyn ResolveReference<A>,
    ) -> usize {
        let mut registered = 0;
        for entry in &settings.references {
            let Some(object) = resolver.resolve(&entry.path) else {
                log::error!(
                    "failed to resolve configured reference [{}] for tag [{}]",
                    entry.path,
                    entry.tag
                );
                continue;
            };
            if self.try_register(entry.tag.clone(), object).is_ok() {
                registered += 1;
            }
        }
        registered
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn tag(raw: &str) -> Tag {
        Tag::new(raw).unwrap()
    }

    #[test]
    fn deserializes_ordered_references() {
        let settings: LibrarySettings = serde_json::from_str(
            r#"{
                "references": [
                    { "tag": "Input.Jump", "path": "input/ia_jump" },
                    { "tag": "Input.Fire", "path": "input/ia_fire" }
                ]
            }"#,
        )
        .unwrap();

        let tags: Vec<&str> = settings
            .references
            .iter()
            .map(|e| e.tag.as_str())
            .collect();
        assert_eq!(tags, vec!["Input.Jump", "Input.Fire"]);
    }

    #[test]
    fn missing_references_field_defaults_to_empty() {
        let settings: LibrarySettings = serde_json::from_str("{}").unwrap();
        assert!(settings.references.is_empty());
    }

    #[test]
    fn rejects_malformed_tag_in_config() {
        let result = serde_json::from_str::<LibrarySettings>(
            r#"{ "references": [ { "tag": "Input..Jump", "path": "p" } ] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn populate_registers_in_declaration_order() {
        let settings = LibrarySettings::new()
            .with_reference(tag("Input.Jump"), "input/ia_jump")
            .with_reference(tag("Input.Fire"), "input/ia_fire");

        let mut library = ReferenceLibrary::new();
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&order);
        library.on_added(move |t: &Tag, _: &Arc<String>| {
            sink.lock().unwrap().push(t.clone());
        });

        let resolver = |path: &str| Some(Arc::new(path.to_uppercase()));
        assert_eq!(library.populate(&settings, &resolver), 2);

        assert_eq!(
            order.lock().unwrap().as_slice(),
            &[tag("Input.Jump"), tag("Input.Fire")]
        );
        assert_eq!(
            library.get(&tag("Input.Jump")).map(|a| a.as_str()),
            Some("INPUT/IA_JUMP")
        );
    }

    #[test]
    fn populate_skips_failed_resolves() {
        let settings = LibrarySettings::new()
            .with_reference(tag("Input.Jump"), "good")
            .with_reference(tag("Input.Fire"), "bad")
            .with_reference(tag("Input.Block"), "good");

        let mut library = ReferenceLibrary::new();
        let resolver = |path: &str| (path == "good").then(|| Arc::new(path.to_string()));

        assert_eq!(library.populate(&settings, &resolver), 2);
        assert!(library.contains(&tag("Input.Jump")));
        assert!(!library.contains(&tag("Input.Fire")));
        assert!(library.contains(&tag("Input.Block")));
    }

    #[test]
    fn populate_keeps_first_entry_on_config_conflict() {
        let settings = LibrarySettings::new()
            .with_reference(tag("Input.Jump"), "first")
            .with_reference(tag("Input.Jump"), "second");

        let mut library = ReferenceLibrary::new();
        let resolver = |path: &str| Some(Arc::new(path.to_string()));

        assert_eq!(library.populate(&settings, &resolver), 1);
        assert_eq!(
            library.get(&tag("Input.Jump")).map(|a| a.as_str()),
            Some("first")
        );
    }
}
