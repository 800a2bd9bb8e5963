//! Currency field type.
//!
//! Turns locale-formatted money input into a canonical decimal string for
//! storage, and stored amounts back into display strings with a currency
//! symbol. Everything is a pure function of the value, the field's
//! [`CurrencyOptions`], and the injected [`CurrencyConfig`].
//!
//! # Separator tables
//!
//! Two tables map a [`CurrencyFormat`] to its separators. Display and the
//! client-side pattern use [`CurrencyFormat::display_separators`]; parsing
//! submitted input uses [`CurrencyFormat::input_separators`], which treats
//! `.` as the thousands separator for both comma-decimal formats. The two
//! tables differ for `9999,99`.

mod config;
mod error;
mod field;
mod format;
mod formatter;
mod number;
mod options;

pub use config::{CurrencyConfig, CurrencyDef, NumberLocale, DEFAULT_CURRENCY};
pub use error::{CurrencyError, CurrencyResult};
pub use field::CurrencyField;
pub use format::{CurrencyFormat, Placement, Separators};
pub use formatter::CurrencyFormatter;
pub use options::{
    CurrencyOptions, DECIMALS_KEY, DEFAULT_DECIMALS, DEFAULT_MAX_LENGTH, FORMAT_KEY,
    MAX_LENGTH_KEY, PLACEMENT_KEY, SIGN_KEY,
};
