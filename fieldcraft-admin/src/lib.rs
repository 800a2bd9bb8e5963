//! Field-list rows for the administration screens.
//!
//! Rendering is split in two steps:
//! - [`FieldRowView::build`] resolves everything a row shows (type label,
//!   relationship description, id badge, embedded JSON) from a
//!   [`FieldRecord`](fieldcraft_model::FieldRecord) and a [`RowContext`]
//! - a [`RowRenderer`] turns the view into markup; [`HtmlRowRenderer`] is
//!   the stock table-row renderer
//!
//! Lookup misses never fail: unknown types read "Unknown" and unknown
//! relationship targets get a label derived from their identifier.

mod catalog;
mod labels;
mod render;
mod view;

pub use catalog::{CatalogEntry, PickObjectCatalog, SELECT_SENTINEL};
pub use labels::{
    resolve_relationship, resolve_relationship_label, resolve_type_label, Relationship,
    UNKNOWN_TYPE_LABEL,
};
pub use render::{render_row, HtmlRowRenderer, RowRenderer};
pub use view::{FieldRowView, RowAction, RowActionKind, RowContext, TEMPLATE_ROW};
