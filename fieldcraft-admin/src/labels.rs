//! Type and relationship label resolution.

use crate::catalog::{CatalogEntry, PickObjectCatalog, SELECT_SENTINEL};
use fieldcraft_model::text::humanize;
use fieldcraft_model::FieldRecord;
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Label shown for a type code missing from the label table.
pub const UNKNOWN_TYPE_LABEL: &str = "Unknown";

/// Parenthesized qualifier such as ` (post)` trailing a catalog label.
static QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s\([A-Za-z0-9_\s]*\)").expect("qualifier pattern is valid")
});

/// Human-readable label of a field type.
pub fn resolve_type_label<'a>(field_type: &str, labels: &'a IndexMap<String, String>) -> &'a str {
    labels
        .get(field_type)
        .map(String::as_str)
        .unwrap_or(UNKNOWN_TYPE_LABEL)
}

/// What a pick field points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    /// Matched a flat catalog entry; its label verbatim.
    Catalog(String),
    /// Matched inside a catalog group: the qualifier-free sub-label and the
    /// singular group name.
    Nested { label: String, group: String },
    /// No catalog match; derived from the field's identifiers.
    Fallback(String),
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relationship::Catalog(label) | Relationship::Fallback(label) => f.write_str(label),
            Relationship::Nested { label, group } => write!(f, "{label} ({group})"),
        }
    }
}

/// Resolve the relationship target of a pick field.
///
/// Returns `None` unless the field is of type `pick` with a non-empty
/// `pick_object`. Catalog entries are scanned in order and the first match
/// wins: group members match on the composite pick key, flat entries match
/// on their own key. The `-- Select --` placeholder is skipped.
pub fn resolve_relationship(
    field: &FieldRecord,
    catalog: &PickObjectCatalog,
) -> Option<Relationship> {
    if !field.is_relationship() {
        return None;
    }
    let key = field.composite_pick_key();

    for (name, entry) in catalog.iter() {
        match entry {
            CatalogEntry::Label(label) if label == SELECT_SENTINEL => continue,
            CatalogEntry::Label(label) => {
                if name == key {
                    return Some(Relationship::Catalog(label.clone()));
                }
            }
            CatalogEntry::Group(members) => {
                if let Some(label) = members.get(&key) {
                    return Some(Relationship::Nested {
                        label: strip_qualifier(label),
                        group: singularize(name),
                    });
                }
            }
        }
    }

    debug!(pick_object = %field.pick_object, pick_val = %field.pick_val, "Relationship target not in catalog");
    let object = humanize(&field.pick_object, &['-', '_']);
    let label = if field.pick_val.is_empty() {
        object
    } else {
        format!("{} ({object})", field.pick_val)
    };
    Some(Relationship::Fallback(label))
}

/// Plain-text form of [`resolve_relationship`].
pub fn resolve_relationship_label(
    field: &FieldRecord,
    catalog: &PickObjectCatalog,
) -> Option<String> {
    resolve_relationship(field, catalog).map(|r| r.to_string())
}

/// Singular form of a catalog group name: a trailing `ies` becomes `y`,
/// then trailing `s` characters are dropped.
fn singularize(group: &str) -> String {
    let group = match group.find("ies") {
        Some(at) if at + 3 == group.len() => format!("{}y", &group[..at]),
        _ => group.to_string(),
    };
    group.trim_end_matches('s').to_string()
}

fn strip_qualifier(label: &str) -> String {
    QUALIFIER.replace_all(label, "").into_owned()
}
