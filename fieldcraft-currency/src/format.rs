use serde::{Deserialize, Serialize};
use std::fmt;

/// Thousands and decimal separators. An empty `thousands` means no grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators<'a> {
    pub thousands: &'a str,
    pub decimal: &'a str,
}

impl<'a> Separators<'a> {
    pub const fn new(thousands: &'a str, decimal: &'a str) -> Self {
        Self { thousands, decimal }
    }

    /// `(thousands, decimal)`
    pub fn as_pair(self) -> (&'a str, &'a str) {
        (self.thousands, self.decimal)
    }
}

const COMMA_DOT: Separators<'static> = Separators::new(",", ".");
const PLAIN_DOT: Separators<'static> = Separators::new("", ".");
const PLAIN_COMMA: Separators<'static> = Separators::new("", ",");
const DOT_COMMA: Separators<'static> = Separators::new(".", ",");

/// Thousands/decimal convention of a currency field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyFormat {
    /// Defer to the configured number locale.
    #[default]
    #[serde(rename = "i18n")]
    Localized,
    #[serde(rename = "9,999.99")]
    CommaDot,
    #[serde(rename = "9999.99")]
    PlainDot,
    #[serde(rename = "9.999,99")]
    DotComma,
    #[serde(rename = "9999,99")]
    PlainComma,
}

impl CurrencyFormat {
    pub const ALL: [CurrencyFormat; 5] = [
        CurrencyFormat::Localized,
        CurrencyFormat::CommaDot,
        CurrencyFormat::PlainDot,
        CurrencyFormat::DotComma,
        CurrencyFormat::PlainComma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyFormat::Localized => "i18n",
            CurrencyFormat::CommaDot => "9,999.99",
            CurrencyFormat::PlainDot => "9999.99",
            CurrencyFormat::DotComma => "9.999,99",
            CurrencyFormat::PlainComma => "9999,99",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Separators used to render amounts and build the input pattern.
    ///
    /// `Localized` reports the comma/dot pair; the formatter substitutes the
    /// configured locale.
    pub fn display_separators(self) -> Separators<'static> {
        match self {
            CurrencyFormat::Localized | CurrencyFormat::CommaDot => COMMA_DOT,
            CurrencyFormat::PlainDot => PLAIN_DOT,
            CurrencyFormat::DotComma => DOT_COMMA,
            CurrencyFormat::PlainComma => PLAIN_COMMA,
        }
    }

    /// Separators stripped from submitted input before parsing.
    ///
    /// Both comma-decimal formats strip `.` as a thousands separator, so
    /// `1.234,50` and `1234,50` parse the same under either. As on the
    /// display side, the formatter reads `Localized` input with the locale.
    pub fn input_separators(self) -> Separators<'static> {
        match self {
            CurrencyFormat::DotComma | CurrencyFormat::PlainComma => DOT_COMMA,
            _ => COMMA_DOT,
        }
    }

    /// Label shown in the format picker.
    pub fn sample(self) -> &'static str {
        match self {
            CurrencyFormat::Localized => "Localized Default",
            CurrencyFormat::CommaDot => "1,234.00",
            CurrencyFormat::PlainDot => "1234.00",
            CurrencyFormat::DotComma => "1.234,00",
            CurrencyFormat::PlainComma => "1234,00",
        }
    }
}

impl fmt::Display for CurrencyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// `$100`
    #[default]
    Before,
    /// `100$`
    After,
    /// `100`
    None,
    /// `$100 USD`
    BeforeAfterCode,
}

impl Placement {
    pub const ALL: [Placement; 4] = [
        Placement::Before,
        Placement::After,
        Placement::None,
        Placement::BeforeAfterCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Before => "before",
            Placement::After => "after",
            Placement::None => "none",
            Placement::BeforeAfterCode => "beforeaftercode",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Label shown in the placement picker.
    pub fn describe(self) -> &'static str {
        match self {
            Placement::Before => "Before ($100)",
            Placement::After => "After (100$)",
            Placement::None => "None (100)",
            Placement::BeforeAfterCode => "Before with Currency Code after ($100 USD)",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
