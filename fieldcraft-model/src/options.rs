//! Per-field option bags and the declared option surface.

use crate::value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loose per-field options as stored alongside a field definition.
///
/// Field types resolve the keys they care about once, at the call boundary,
/// into their own typed options.
pub type OptionBag = Map<String, Value>;

/// Look up a non-empty string option. Numbers are rendered to text.
pub fn option_str<'a>(bag: &'a OptionBag, key: &str) -> Option<std::borrow::Cow<'a, str>> {
    match bag.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.as_str().into()),
        Value::Number(n) => Some(n.to_string().into()),
        _ => None,
    }
}

/// Look up an integer option using the loose integer cast.
///
/// Missing keys, `null`, and empty strings are absent.
pub fn option_int(bag: &OptionBag, key: &str) -> Option<i64> {
    match bag.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        v => Some(value::to_int(v)),
    }
}

/// How an option is edited in the field-configuration UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionKind {
    /// One of a fixed set of choices, `{value -> label}` in display order.
    Pick { choices: IndexMap<String, String> },
    /// A whole number.
    Integer,
}

/// One entry of a field type's declared configuration surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub name: String,
    pub label: String,
    pub default: Value,
    #[serde(flatten)]
    pub kind: OptionKind,
}

impl OptionDefinition {
    /// Shorthand for a pick-list option.
    pub fn pick<I, K, V>(name: &str, label: &str, default: &str, choices: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            label: label.into(),
            default: Value::String(default.into()),
            kind: OptionKind::Pick {
                choices: choices
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            },
        }
    }

    /// Shorthand for an integer option.
    pub fn integer(name: &str, label: &str, default: i64) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            default: Value::from(default),
            kind: OptionKind::Integer,
        }
    }
}
