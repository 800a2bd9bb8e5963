use crate::catalog::PickObjectCatalog;
use crate::labels::{resolve_relationship, resolve_type_label, Relationship};
use fieldcraft_model::{FieldRecord, FieldResult};
use indexmap::IndexMap;
use serde::Serialize;

/// Row index of the hidden template row cloned for new fields.
pub const TEMPLATE_ROW: &str = "--1";

/// Lookup tables and position shared by one row.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    /// Row index within the field list.
    pub row: &'a str,
    /// `{type_id -> label}`
    pub type_labels: &'a IndexMap<String, String>,
    pub catalog: &'a PickObjectCatalog,
}

impl<'a> RowContext<'a> {
    pub fn new(
        row: &'a str,
        type_labels: &'a IndexMap<String, String>,
        catalog: &'a PickObjectCatalog,
    ) -> Self {
        Self {
            row,
            type_labels,
            catalog,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowActionKind {
    Edit,
    Duplicate,
    Delete,
}

/// Inline action link under a field's label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowAction {
    pub kind: RowActionKind,
    pub label: &'static str,
    pub title: &'static str,
    pub href: &'static str,
}

impl RowAction {
    fn standard() -> Vec<RowAction> {
        vec![
            RowAction {
                kind: RowActionKind::Edit,
                label: "Edit",
                title: "Edit this field",
                href: "#edit-field",
            },
            RowAction {
                kind: RowActionKind::Duplicate,
                label: "Duplicate",
                title: "Duplicate this field",
                href: "#duplicate-field",
            },
            RowAction {
                kind: RowActionKind::Delete,
                label: "Delete",
                title: "Delete this field",
                href: "#delete-field",
            },
        ]
    }
}

/// Everything one field-list row displays, resolved and ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRowView {
    pub row: String,
    /// True for the template row.
    pub template: bool,
    pub id: String,
    /// `None` for unsaved fields.
    pub id_badge: Option<String>,
    pub name: String,
    pub label: String,
    pub required: bool,
    pub actions: Vec<RowAction>,
    /// JSON copy of the field embedded in the row for client-side editing.
    pub field_json: String,
    pub type_code: String,
    pub type_label: String,
    pub relationship: Option<Relationship>,
}

impl FieldRowView {
    /// Resolve a row for `field`. The record is not modified.
    pub fn build(field: &FieldRecord, ctx: &RowContext<'_>) -> FieldResult<Self> {
        let id_badge = if field.is_placeholder() || field.id.is_empty() {
            None
        } else {
            Some(field.id.clone())
        };

        Ok(Self {
            row: ctx.row.to_string(),
            template: ctx.row == TEMPLATE_ROW,
            id: field.id.clone(),
            id_badge,
            name: field.name.clone(),
            label: field.label.clone(),
            required: field.required,
            actions: RowAction::standard(),
            field_json: field.to_row_json()?,
            type_code: field.field_type.clone(),
            type_label: resolve_type_label(&field.field_type, ctx.type_labels).to_string(),
            relationship: resolve_relationship(field, ctx.catalog),
        })
    }
}
