use crate::config::CurrencyConfig;
use crate::format::{CurrencyFormat, Placement, Separators};
use crate::number;
use crate::options::CurrencyOptions;
use fieldcraft_model::{ColumnSchema, FieldError, FieldResult};
use fieldcraft_model::value::to_float;
use serde_json::Value;
use tracing::debug;

/// Parses and renders currency amounts.
///
/// Holds the read-only [`CurrencyConfig`]; every method is a pure function
/// of its arguments and that config, so one formatter can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    config: CurrencyConfig,
}

impl CurrencyFormatter {
    pub fn new(config: CurrencyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }

    /// Display-side separators, with the configured locale standing in for
    /// the localized format.
    pub fn separators<'a>(&'a self, opts: &CurrencyOptions) -> Separators<'a> {
        match opts.format {
            CurrencyFormat::Localized => Separators::new(
                &self.config.locale.thousands_sep,
                &self.config.locale.decimal_point,
            ),
            format => format.display_separators(),
        }
    }

    /// Separators stripped from submitted input.
    ///
    /// The localized format reads input with the configured locale, the same
    /// pair [`format`](Self::format) renders with.
    pub fn input_separators<'a>(&'a self, opts: &CurrencyOptions) -> Separators<'a> {
        match opts.format {
            CurrencyFormat::Localized => self.separators(opts),
            format => format.input_separators(),
        }
    }

    /// Loose numeric reading of a stored value.
    pub fn coerce(&self, value: &Value) -> f64 {
        to_float(value)
    }

    /// Canonical storage form of submitted input: no grouping, `.` as the
    /// decimal point, exactly `opts.decimals` fractional digits.
    ///
    /// The thousands separator is removed, the decimal separator becomes
    /// `.`, and any other character outside `[0-9.]` is dropped. Blank input
    /// normalizes to zero. Anything else must leave at least one digit and at
    /// most one point behind, or it fails with [`FieldError::NotNumeric`].
    pub fn normalize(&self, raw: &str, opts: &CurrencyOptions) -> FieldResult<String> {
        let seps = self.input_separators(opts);
        let mut cleaned = if seps.thousands.is_empty() {
            raw.to_string()
        } else {
            raw.replace(seps.thousands, "")
        };
        if !seps.decimal.is_empty() && seps.decimal != "." {
            cleaned = cleaned.replace(seps.decimal, ".");
        }
        cleaned.retain(|c| c.is_ascii_digit() || c == '.');

        let plain = if raw.trim().is_empty() {
            "0".to_string()
        } else {
            number::plain_number(&cleaned).ok_or_else(|| {
                let label = opts.label.clone().unwrap_or_else(|| "Value".into());
                debug!(raw, cleaned = %cleaned, label = %label, "Rejected non-numeric currency input");
                FieldError::NotNumeric { label }
            })?
        };

        Ok(number::round(&plain, opts.decimals))
    }

    /// Render an amount with `opts.decimals` digits and the format's
    /// separators, without a currency symbol.
    ///
    /// Non-finite amounts render as zero.
    pub fn format(&self, value: f64, opts: &CurrencyOptions) -> String {
        let plain = number::plain_from_f64(value).unwrap_or_else(|| {
            debug!(value, "Non-finite currency amount, rendering as zero");
            "0".to_string()
        });
        number::group(&number::round(&plain, opts.decimals), self.separators(opts))
    }

    /// [`format`](Self::format) plus the currency symbol, placed per
    /// `opts.placement`.
    pub fn display(&self, value: f64, opts: &CurrencyOptions) -> String {
        let amount = self.format(value, opts);
        let Some((code, currency)) = self.config.resolve(&opts.sign) else {
            return amount;
        };
        let symbol = &currency.symbol;

        match opts.placement {
            Placement::Before => format!("{symbol}{amount}"),
            Placement::After => format!("{amount}{symbol}"),
            Placement::None => amount,
            Placement::BeforeAfterCode => {
                format!("{symbol}{amount} {}", code.to_uppercase())
            }
        }
    }

    /// Character class accepted by client-side input filtering, e.g.
    /// `[0-9\.\,]+`. An empty separator is left out of the class.
    pub fn validation_pattern(&self, opts: &CurrencyOptions) -> String {
        let seps = self.separators(opts);
        let allowed: Vec<&str> = [seps.decimal, seps.thousands]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        format!("[0-9\\{}]+", allowed.join("\\"))
    }

    /// Fixed-point column sized by the field's maximum length and decimals.
    pub fn storage_schema(&self, opts: &CurrencyOptions) -> ColumnSchema {
        ColumnSchema::Decimal {
            precision: opts.max_length,
            scale: opts.decimals,
        }
    }

    /// sprintf placeholder for binding stored amounts.
    pub fn prepare(&self, opts: &CurrencyOptions) -> String {
        match opts.decimals {
            0 => "%d".into(),
            d => format!("%01.{d}f"),
        }
    }
}
