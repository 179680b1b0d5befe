//! Content-type identity and metadata.
//!
//! A content type is a named schema of content records (for example "pages"
//! or "entries") configured in the surrounding application. The prefill
//! service only needs its name and whether it is a singleton.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier naming a configured content type.
///
/// Names key the prefill report's sub-maps and the storage lookups, and the
/// order they are supplied in determines processing order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeName(String);

impl ContentTypeName {
    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentTypeName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ContentTypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Per-type metadata the prefill service consults before generating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentTypeMeta {
    /// Restricts the content type to at most one record instance.
    pub singleton: bool,
}

impl ContentTypeMeta {
    /// Creates metadata with the given singleton flag.
    #[must_use]
    pub const fn new(singleton: bool) -> Self {
        Self { singleton }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_displays_as_raw_string() {
        let name = ContentTypeName::from("pages");
        assert_eq!(name.to_string(), "pages");
        assert_eq!(name.as_str(), "pages");
    }

    #[test]
    fn name_serializes_transparently() {
        let name = ContentTypeName::from("entries");
        let json = serde_json::to_string(&name).expect("serialize");
        assert_eq!(json, "\"entries\"");
    }

    #[test]
    fn meta_defaults_to_non_singleton() {
        assert!(!ContentTypeMeta::default().singleton);
        assert!(ContentTypeMeta::new(true).singleton);
    }
}
