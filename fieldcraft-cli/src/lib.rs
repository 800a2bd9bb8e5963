//! Shared plumbing for the `fieldcraft` binary.
//!
//! Kept in a library so the option parsing and file loading can be tested
//! without spawning the binary.

use anyhow::{Context, Result, bail};
use fieldcraft_admin::PickObjectCatalog;
use fieldcraft_currency::{CurrencyConfig, CurrencyField};
use fieldcraft_model::{FieldRecord, FieldTypeRegistry, OptionBag};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse repeated `key=value` pairs into an option bag.
///
/// Values are kept as strings; handlers cast them loosely.
pub fn parse_options(pairs: &[String]) -> Result<OptionBag> {
    let mut bag = OptionBag::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("option `{pair}` is not of the form key=value");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("option `{pair}` has an empty key");
        }
        bag.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(bag)
}

/// Registry with every built-in field type.
pub fn builtin_registry(config: CurrencyConfig) -> Result<FieldTypeRegistry> {
    let mut registry = FieldTypeRegistry::new();
    registry
        .register(CurrencyField::new(config))
        .context("registering currency field type")?;
    Ok(registry)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {what} from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {what} in {}", path.display()))
}

pub fn load_field(path: &Path) -> Result<FieldRecord> {
    read_json(path, "field record")
}

pub fn load_type_labels(path: &Path) -> Result<IndexMap<String, String>> {
    read_json(path, "type labels")
}

pub fn load_catalog(path: &Path) -> Result<PickObjectCatalog> {
    read_json(path, "pick object catalog")
}
