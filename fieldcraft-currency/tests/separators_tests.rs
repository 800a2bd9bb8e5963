use fieldcraft_currency::{
    CurrencyConfig, CurrencyFormat, CurrencyFormatter, CurrencyOptions, Separators,
};

fn pair(s: Separators<'_>) -> (&str, &str) {
    s.as_pair()
}

// ── Display side ─────────────────────────────────────────────────

#[test]
fn display_table() {
    assert_eq!(pair(CurrencyFormat::CommaDot.display_separators()), (",", "."));
    assert_eq!(pair(CurrencyFormat::PlainDot.display_separators()), ("", "."));
    assert_eq!(pair(CurrencyFormat::PlainComma.display_separators()), ("", ","));
    assert_eq!(pair(CurrencyFormat::DotComma.display_separators()), (".", ","));
    assert_eq!(pair(CurrencyFormat::Localized.display_separators()), (",", "."));
}

#[test]
fn formatter_separators_use_locale_for_localized() {
    let formatter = CurrencyFormatter::new(CurrencyConfig::default().with_locale("\u{a0}", ","));
    let opts = CurrencyOptions::default();
    assert_eq!(pair(formatter.separators(&opts)), ("\u{a0}", ","));

    let opts = opts.with_format(CurrencyFormat::DotComma);
    assert_eq!(pair(formatter.separators(&opts)), (".", ","));
}

#[test]
fn default_formatter_separators_are_comma_dot() {
    let formatter = CurrencyFormatter::default();
    assert_eq!(pair(formatter.separators(&CurrencyOptions::default())), (",", "."));
}

// ── Input side ───────────────────────────────────────────────────

#[test]
fn input_table() {
    assert_eq!(pair(CurrencyFormat::CommaDot.input_separators()), (",", "."));
    assert_eq!(pair(CurrencyFormat::PlainDot.input_separators()), (",", "."));
    assert_eq!(pair(CurrencyFormat::Localized.input_separators()), (",", "."));
    assert_eq!(pair(CurrencyFormat::DotComma.input_separators()), (".", ","));
    assert_eq!(pair(CurrencyFormat::PlainComma.input_separators()), (".", ","));
}

#[test]
fn formatter_input_separators_use_locale_for_localized() {
    let formatter = CurrencyFormatter::new(CurrencyConfig::default().with_locale(".", ","));
    let opts = CurrencyOptions::default();
    assert_eq!(pair(formatter.input_separators(&opts)), (".", ","));
    assert_eq!(formatter.input_separators(&opts), formatter.separators(&opts));

    let opts = opts.with_format(CurrencyFormat::CommaDot);
    assert_eq!(pair(formatter.input_separators(&opts)), (",", "."));
}

#[test]
fn plain_comma_differs_between_sides() {
    let f = CurrencyFormat::PlainComma;
    assert_ne!(f.display_separators(), f.input_separators());
    assert_eq!(f.display_separators().thousands, "");
    assert_eq!(f.input_separators().thousands, ".");
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn format_parse_round_trips_identifiers() {
    for f in CurrencyFormat::ALL {
        assert_eq!(CurrencyFormat::parse(f.as_str()), Some(f));
        assert_eq!(f.to_string(), f.as_str());
    }
    assert_eq!(CurrencyFormat::parse("9 999,99"), None);
}

#[test]
fn format_serde_uses_identifiers() {
    let json = serde_json::to_string(&CurrencyFormat::DotComma).unwrap();
    assert_eq!(json, "\"9.999,99\"");
    let parsed: CurrencyFormat = serde_json::from_str("\"i18n\"").unwrap();
    assert_eq!(parsed, CurrencyFormat::Localized);
}
