use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage column a field type asks the persistence layer for.
///
/// `Display` renders the SQL column type, e.g. `DECIMAL(12,2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnSchema {
    /// Fixed-point number with `precision` total digits, `scale` after the point.
    Decimal { precision: u32, scale: u32 },
    /// Variable-length text up to `length` characters.
    Varchar { length: u32 },
}

impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSchema::Decimal { precision, scale } => {
                write!(f, "DECIMAL({precision},{scale})")
            }
            ColumnSchema::Varchar { length } => write!(f, "VARCHAR({length})"),
        }
    }
}
