//! Field-type model for fieldcraft.
//!
//! Defines the contract every field type implements and the records the
//! admin surface works with:
//! - [`FieldTypeHandler`]: the plugin trait (options, schema, validate, pre-save, display, input)
//! - [`FieldTypeRegistry`]: ordered set of registered handlers, source of the type label table
//! - [`FieldRecord`]: a field definition as stored by the hosting configuration system
//! - [`OptionBag`] / [`OptionDefinition`]: loose per-field options and their declared surface
//! - [`ColumnSchema`]: the storage column a field type asks for
//!
//! Field types never talk to storage or markup directly; they describe
//! what they need and transform values.

mod error;
mod handler;
mod options;
mod record;
mod registry;
mod schema;
pub mod text;
pub mod value;

pub use error::{FieldError, FieldResult};
pub use handler::{FieldTypeDescriptor, FieldTypeHandler, InputView};
pub use options::{
    option_int, option_str, OptionBag, OptionDefinition, OptionKind,
};
pub use record::{FieldRecord, PLACEHOLDER_FIELD_ID};
pub use registry::FieldTypeRegistry;
pub use schema::ColumnSchema;
