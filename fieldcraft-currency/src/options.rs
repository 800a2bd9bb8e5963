use crate::config::DEFAULT_CURRENCY;
use crate::format::{CurrencyFormat, Placement};
use fieldcraft_model::{option_int, option_str, OptionBag};
use tracing::warn;

pub const SIGN_KEY: &str = "currency_format_sign";
pub const PLACEMENT_KEY: &str = "currency_format_placement";
pub const FORMAT_KEY: &str = "currency_format";
pub const DECIMALS_KEY: &str = "currency_decimals";
pub const MAX_LENGTH_KEY: &str = "currency_max_length";
const LABEL_KEY: &str = "label";

pub const DEFAULT_DECIMALS: u32 = 2;
pub const DEFAULT_MAX_LENGTH: u32 = 12;

/// Resolved options of a currency field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyOptions {
    /// Currency code, e.g. `usd`. Unknown codes display as the default currency.
    pub sign: String,
    pub placement: Placement,
    pub format: CurrencyFormat,
    /// Digits after the decimal point.
    pub decimals: u32,
    /// Total digits of the storage column. Always at least 1.
    pub max_length: u32,
    /// Field label used in validation messages.
    pub label: Option<String>,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            sign: DEFAULT_CURRENCY.into(),
            placement: Placement::default(),
            format: CurrencyFormat::default(),
            decimals: DEFAULT_DECIMALS,
            max_length: DEFAULT_MAX_LENGTH,
            label: None,
        }
    }
}

impl CurrencyOptions {
    /// Resolve the `currency_*` keys of a field's option bag.
    ///
    /// Missing or empty keys take their defaults. Decimals below 1 become 0,
    /// a maximum length below 1 becomes 12. Unrecognized placement or format
    /// values fall back to the default.
    pub fn from_bag(bag: &OptionBag) -> Self {
        let mut opts = Self::default();

        if let Some(sign) = option_str(bag, SIGN_KEY) {
            opts.sign = sign.into_owned();
        }

        if let Some(raw) = option_str(bag, PLACEMENT_KEY) {
            match Placement::parse(&raw) {
                Some(p) => opts.placement = p,
                None => warn!(value = %raw, "Unknown currency placement, using default"),
            }
        }

        if let Some(raw) = option_str(bag, FORMAT_KEY) {
            match CurrencyFormat::parse(&raw) {
                Some(f) => opts.format = f,
                None => warn!(value = %raw, "Unknown currency format, using default"),
            }
        }

        if let Some(decimals) = option_int(bag, DECIMALS_KEY) {
            opts.decimals = if decimals < 1 { 0 } else { saturate(decimals) };
        }

        if let Some(length) = option_int(bag, MAX_LENGTH_KEY) {
            opts.max_length = if length < 1 { DEFAULT_MAX_LENGTH } else { saturate(length) };
        }

        opts.label = option_str(bag, LABEL_KEY).map(|l| l.into_owned());
        opts
    }

    pub fn with_sign(mut self, sign: &str) -> Self {
        self.sign = sign.into();
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_format(mut self, format: CurrencyFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.into());
        self
    }
}

fn saturate(n: i64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
