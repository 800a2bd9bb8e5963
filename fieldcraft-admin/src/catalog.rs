use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder entry at the top of a catalog; never matches a field.
pub const SELECT_SENTINEL: &str = "-- Select --";

/// One entry of a [`PickObjectCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    /// A target type with its display label.
    Label(String),
    /// A named group of `{composite key -> label}` sub-targets.
    Group(IndexMap<String, String>),
}

/// Relationship targets a pick field can point at, in display order.
///
/// Deserializes from a JSON object whose values are either labels or
/// nested objects of labels:
///
/// ```json
/// {
///   "": "-- Select --",
///   "Post Types": {"post_type-post": "Posts (post)", "post_type-page": "Pages (page)"},
///   "user": "Users"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickObjectCatalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl PickObjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flat entry.
    pub fn with_label(mut self, key: &str, label: &str) -> Self {
        self.entries
            .insert(key.into(), CatalogEntry::Label(label.into()));
        self
    }

    /// Append a group of sub-targets.
    pub fn with_group<I, K, V>(mut self, name: &str, members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let members = members
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.entries.insert(name.into(), CatalogEntry::Group(members));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
