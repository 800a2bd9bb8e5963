//! Currency table and number locale, optionally loaded from TOML.
//!
//! ```toml
//! [locale]
//! thousands_sep = "."
//! decimal_point = ","
//!
//! [currencies.eur]
//! symbol = "€"
//! ```
//!
//! Configured currencies extend the built-in `usd`/`cad` entries and may
//! override them.

use crate::error::{CurrencyError, CurrencyResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Currency used when a field names an unknown one.
pub const DEFAULT_CURRENCY: &str = "usd";

/// A currency the formatter can display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDef {
    pub symbol: String,
    /// Picker label. Defaults to `"{symbol} ({CODE})"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CurrencyDef {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.into(),
            label: None,
        }
    }

    pub fn label_for(&self, code: &str) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} ({})", self.symbol, code.to_uppercase()),
        }
    }
}

/// Separators used by the localized format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    #[serde(default = "default_thousands_sep")]
    pub thousands_sep: String,
    #[serde(default = "default_decimal_point")]
    pub decimal_point: String,
}

fn default_thousands_sep() -> String {
    ",".to_string()
}

fn default_decimal_point() -> String {
    ".".to_string()
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            thousands_sep: default_thousands_sep(),
            decimal_point: default_decimal_point(),
        }
    }
}

/// Lookup tables the currency formatter reads. Built once, then shared
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    #[serde(default)]
    pub locale: NumberLocale,
    #[serde(default = "default_currencies")]
    pub currencies: IndexMap<String, CurrencyDef>,
}

fn default_currencies() -> IndexMap<String, CurrencyDef> {
    IndexMap::from([
        ("usd".to_string(), CurrencyDef::new("$")),
        ("cad".to_string(), CurrencyDef::new("$")),
    ])
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            currencies: default_currencies(),
        }
    }
}

/// On-disk shape: currencies here are merged over the defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    locale: NumberLocale,
    #[serde(default)]
    currencies: IndexMap<String, CurrencyDef>,
}

impl ConfigFile {
    fn into_config(self) -> CurrencyConfig {
        let mut config = CurrencyConfig {
            locale: self.locale,
            ..CurrencyConfig::default()
        };
        for (code, def) in self.currencies {
            config.currencies.insert(code.to_lowercase(), def);
        }
        config
    }
}

impl CurrencyConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> CurrencyResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.into_config())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> CurrencyResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CurrencyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), currencies = config.currencies.len(), "Loaded currency config");
        Ok(config)
    }

    /// Load configuration from `path`, falling back to the defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "No currency config found, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load currency config, using defaults");
                Self::default()
            }
        }
    }

    /// Add or replace a currency.
    pub fn with_currency(mut self, code: &str, symbol: &str) -> Self {
        self.currencies
            .insert(code.to_lowercase(), CurrencyDef::new(symbol));
        self
    }

    pub fn with_locale(mut self, thousands_sep: &str, decimal_point: &str) -> Self {
        self.locale = NumberLocale {
            thousands_sep: thousands_sep.into(),
            decimal_point: decimal_point.into(),
        };
        self
    }

    /// The currency to display for `code`, falling back to the default
    /// currency for unknown codes.
    pub fn resolve(&self, code: &str) -> Option<(&str, &CurrencyDef)> {
        self.currencies
            .get_key_value(code)
            .or_else(|| self.currencies.get_key_value(DEFAULT_CURRENCY))
            .map(|(k, v)| (k.as_str(), v))
    }
}
