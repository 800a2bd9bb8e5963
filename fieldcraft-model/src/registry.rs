//! Registry of available field types.

use crate::error::{FieldError, FieldResult};
use crate::handler::FieldTypeHandler;
use indexmap::IndexMap;
use tracing::info;

/// Owns every registered field type, in registration order.
#[derive(Default)]
pub struct FieldTypeRegistry {
    handlers: IndexMap<String, Box<dyn FieldTypeHandler>>,
}

impl FieldTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under its descriptor's type id.
    pub fn register<H>(&mut self, handler: H) -> FieldResult<()>
    where
        H: FieldTypeHandler + 'static,
    {
        let descriptor = handler.descriptor();
        if self.handlers.contains_key(&descriptor.type_id) {
            return Err(FieldError::DuplicateFieldType(descriptor.type_id));
        }
        info!(
            type_id = %descriptor.type_id,
            group = %descriptor.group,
            "Field type registered"
        );
        self.handlers.insert(descriptor.type_id, Box::new(handler));
        Ok(())
    }

    pub fn get(&self, type_id: &str) -> Option<&dyn FieldTypeHandler> {
        self.handlers.get(type_id).map(|h| h.as_ref())
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.handlers.contains_key(type_id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// `{type_id -> label}` in registration order.
    pub fn type_labels(&self) -> IndexMap<String, String> {
        self.handlers
            .values()
            .map(|h| {
                let d = h.descriptor();
                (d.type_id, d.label)
            })
            .collect()
    }
}

impl std::fmt::Debug for FieldTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTypeRegistry")
            .field("types", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
