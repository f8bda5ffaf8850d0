//! Hierarchical tag identifiers — validated, dot-separated lookup keys.
//!
//! A [`Tag`] names a logical input action or mapping ("InputAction.Jump").
//! The library treats tags as opaque beyond their segment structure: it never
//! interprets what a tag names, only whether two tags are equal and how they
//! nest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a [`Tag`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("empty tag is not allowed")]
    Empty,
    #[error("tag '{0}' contains an empty segment")]
    EmptySegment(String),
}

/// A hierarchical, dot-separated identifier.
///
/// Tags are the unique lookup keys of the reference library. Validation
/// happens at construction (including serde deserialization), so every
/// `Tag` value in circulation is well-formed: non-empty, with no empty
/// segments.
///
/// ```
/// use bevy_input_library::Tag;
///
/// let jump = Tag::new("InputAction.Jump").unwrap();
/// assert_eq!(jump.depth(), 2);
/// assert_eq!(jump.parent().unwrap().as_str(), "InputAction");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Parse and validate a tag.
    pub fn new(tag: impl Into<String>) -> Result<Self, TagError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(TagError::Empty);
        }
        if tag.split('.').any(str::is_empty) {
            return Err(TagError::EmptySegment(tag));
        }
        Ok(Self(tag))
    }

    /// The full dotted form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the dot-separated segments.
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of segments (1 for a root tag).
    #[inline]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// The tag with the last segment removed, or `None` for a root tag.
    pub fn parent(&self) -> Option<Tag> {
        self.0.rfind('.').map(|pos| Tag(self.0[..pos].to_string()))
    }

    /// Check if this tag is `ancestor` itself or nested anywhere below it.
    ///
    /// ```
    /// # use bevy_input_library::Tag;
    /// let jump = Tag::new("InputAction.Jump").unwrap();
    /// let root = Tag::new("InputAction").unwrap();
    /// assert!(jump.is_descendant_of(&root));
    /// assert!(root.is_descendant_of(&root));
    /// assert!(!root.is_descendant_of(&jump));
    /// ```
    pub fn is_descendant_of(&self, ancestor: &Tag) -> bool {
        self.0.strip_prefix(ancestor.as_str()) // segment boundary, not just a string prefix
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
