use crate::error::FieldResult;
use crate::options::{OptionBag, OptionDefinition};
use crate::schema::ColumnSchema;
use crate::value;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of a field type as shown in the field-type picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTypeDescriptor {
    /// Picker group, e.g. "Number".
    pub group: String,
    /// Stable type id stored on field records, e.g. "currency".
    pub type_id: String,
    /// Human-readable name, e.g. "Currency".
    pub label: String,
}

/// View model for a field's edit control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputView {
    pub name: String,
    pub field_type: String,
    /// Text shown in the control.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

/// Contract every field type implements.
///
/// Only `descriptor` is required. The defaults describe a plain text field
/// that accepts anything and displays values verbatim.
pub trait FieldTypeHandler: Send + Sync {
    fn descriptor(&self) -> FieldTypeDescriptor;

    /// Declared configuration surface for the field-configuration UI.
    fn options(&self) -> Vec<OptionDefinition> {
        Vec::new()
    }

    /// Storage column for values of this type.
    fn schema(&self, options: &OptionBag) -> ColumnSchema {
        let _ = options;
        ColumnSchema::Varchar { length: 255 }
    }

    /// sprintf-style placeholder the persistence layer binds values with.
    fn prepare(&self, options: &OptionBag) -> String {
        let _ = options;
        "%s".into()
    }

    /// Check a submitted value. `Err` carries a message for the editor.
    fn validate(&self, value: &Value, name: &str, options: &OptionBag) -> FieldResult<()> {
        let _ = (value, name, options);
        Ok(())
    }

    /// Canonicalize a value right before it is stored.
    fn pre_save(&self, value: &Value, name: &str, options: &OptionBag) -> FieldResult<Value> {
        let _ = (name, options);
        Ok(value.clone())
    }

    /// Reformat a stored value without decoration.
    fn format(&self, value: &Value, options: &OptionBag) -> String {
        let _ = options;
        value::to_text(value)
    }

    /// Render a stored value for output.
    fn display(&self, value: &Value, options: &OptionBag) -> String {
        self.format(value, options)
    }

    /// Render a stored value for a management list column.
    fn ui(&self, value: &Value, options: &OptionBag) -> String {
        self.display(value, options)
    }

    /// Client-side input filter, if the type has one.
    fn regex(&self, options: &OptionBag) -> Option<String> {
        let _ = options;
        None
    }

    /// Build the edit control for `value`.
    ///
    /// Array values are concatenated first. A value that fails `pre_save`
    /// is shown as submitted so the editor can correct it.
    fn input(&self, name: &str, value: &Value, options: &OptionBag) -> InputView {
        let flat = Value::String(value::to_text(value));
        let value = match self.pre_save(&flat, name, options) {
            Ok(saved) => value::to_text(&saved),
            Err(_) => value::to_text(&flat),
        };
        InputView {
            name: name.into(),
            field_type: self.descriptor().type_id,
            value,
            pattern: self.regex(options),
            max_length: None,
        }
    }
}
