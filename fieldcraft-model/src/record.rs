use crate::error::FieldResult;
use crate::options::OptionBag;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Id carried by a field that has not been saved yet.
pub const PLACEHOLDER_FIELD_ID: &str = "__1";

/// A field definition as kept by the hosting configuration system.
///
/// Unknown keys are preserved in `extra` so that a record survives a
/// load/save cycle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub field_type: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub required: bool,
    #[serde(default, deserialize_with = "lenient::int")]
    pub weight: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pick_object: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pick_val: String,
    #[serde(default, deserialize_with = "lenient::bag")]
    pub options: OptionBag,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldRecord {
    /// `"{pick_object}-{pick_val}"` with leading/trailing hyphens trimmed,
    /// so an empty half leaves no dangling separator.
    pub fn composite_pick_key(&self) -> String {
        format!("{}-{}", self.pick_object, self.pick_val)
            .trim_matches('-')
            .to_string()
    }

    /// True for a field that has never been saved.
    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_FIELD_ID
    }

    /// True when this field references a relationship target.
    pub fn is_relationship(&self) -> bool {
        self.field_type == "pick" && !self.pick_object.is_empty()
    }

    /// JSON copy of the record embedded in an admin row.
    ///
    /// `pick_val` is folded into `pick_object`; `weight` and `options` are
    /// dropped since the row owns ordering and options are edited elsewhere.
    pub fn to_row_json(&self) -> FieldResult<String> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            map.remove("weight");
            map.remove("options");
            map.remove("pick_val");
            map.insert(
                "pick_object".into(),
                Value::String(self.composite_pick_key()),
            );
        }
        Ok(serde_json::to_string(&value)?)
    }
}

/// Deserializers that accept whatever shape a form or older export wrote.
mod lenient {
    use crate::value;
    use serde::{Deserialize, Deserializer};
    use serde_json::{Map, Value};

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(value::to_text(&Value::deserialize(d)?))
    }

    /// Only values loosely equal to `1` count as set.
    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(value::to_float(&Value::deserialize(d)?) == 1.0)
    }

    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Ok(value::to_int(&Value::deserialize(d)?))
    }

    pub fn bag<'de, D: Deserializer<'de>>(d: D) -> Result<Map<String, Value>, D::Error> {
        match Value::deserialize(d)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}
