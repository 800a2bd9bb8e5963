//! Property tests: rendering an amount and reading it back is stable.

use fieldcraft_currency::{
    CurrencyConfig, CurrencyField, CurrencyFormat, CurrencyFormatter, CurrencyOptions, Placement,
};
use fieldcraft_model::FieldTypeHandler;
use proptest::prelude::*;
use serde_json::{Value, json};

fn format_strategy() -> impl Strategy<Value = CurrencyFormat> {
    prop::sample::select(CurrencyFormat::ALL.to_vec())
}

fn placement_strategy() -> impl Strategy<Value = Placement> {
    prop::sample::select(Placement::ALL.to_vec())
}

fn options_strategy() -> impl Strategy<Value = CurrencyOptions> {
    (
        format_strategy(),
        placement_strategy(),
        prop::sample::select(vec!["usd", "cad", "eur", "chf", "xyz"]),
        0u32..=4,
    )
        .prop_map(|(format, placement, sign, decimals)| {
            CurrencyOptions::default()
                .with_format(format)
                .with_placement(placement)
                .with_sign(sign)
                .with_decimals(decimals)
        })
}

/// Formatters with the stock locale and a few common national ones.
fn formatter_strategy() -> impl Strategy<Value = CurrencyFormatter> {
    prop::sample::select(vec![
        (",", "."),
        (".", ","),
        (" ", ","),
        ("\u{a0}", ","),
        ("'", "."),
        ("", "."),
    ])
    .prop_map(|(thousands, decimal)| {
        CurrencyFormatter::new(
            CurrencyConfig::default()
                .with_locale(thousands, decimal)
                .with_currency("eur", "€")
                .with_currency("chf", "CHF "),
        )
    })
}

proptest! {
    /// normalize(format(x)) is a fixed point after one cycle.
    #[test]
    fn normalize_format_is_idempotent(
        x in 0.0f64..1e9,
        formatter in formatter_strategy(),
        opts in options_strategy(),
    ) {
        let first = formatter.normalize(&formatter.format(x, &opts), &opts).unwrap();
        let reparsed: f64 = first.parse().unwrap();
        let second = formatter.normalize(&formatter.format(reparsed, &opts), &opts).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Reading back a formatted amount gives the amount rounded to `decimals`.
    #[test]
    fn normalize_reads_back_formatted_amount(
        cents in 0u64..100_000_000_000,
        formatter in formatter_strategy(),
        format in format_strategy(),
    ) {
        let opts = CurrencyOptions::default().with_format(format).with_decimals(2);
        let expected = format!("{}.{:02}", cents / 100, cents % 100);
        let amount: f64 = expected.parse().unwrap();

        prop_assert_eq!(formatter.normalize(&formatter.format(amount, &opts), &opts).unwrap(), expected);
    }

    /// The canonical form has exactly `decimals` digits after a single point.
    #[test]
    fn canonical_shape(
        x in 0.0f64..1e9,
        formatter in formatter_strategy(),
        opts in options_strategy(),
    ) {
        let canonical = formatter.normalize(&formatter.format(x, &opts), &opts).unwrap();

        match canonical.split_once('.') {
            Some((int_part, frac)) => {
                prop_assert!(opts.decimals > 0);
                prop_assert_eq!(frac.len() as u32, opts.decimals);
                prop_assert!(int_part.bytes().all(|b| b.is_ascii_digit()));
            }
            None => {
                prop_assert_eq!(opts.decimals, 0);
                prop_assert!(canonical.bytes().all(|b| b.is_ascii_digit()));
            }
        }
    }

    /// Long digit strings keep the exact shape too.
    #[test]
    fn canonical_shape_for_long_input(digits in "[1-9][0-9]{20,40}", decimals in 0u32..=6) {
        let formatter = CurrencyFormatter::default();
        let opts = CurrencyOptions::default().with_decimals(decimals);
        let canonical = formatter.normalize(&digits, &opts).unwrap();

        if decimals == 0 {
            prop_assert_eq!(canonical, digits);
        } else {
            prop_assert_eq!(canonical, format!("{digits}.{}", "0".repeat(decimals as usize)));
        }
    }

    /// Display only ever adds decoration around the formatted amount.
    #[test]
    fn display_contains_format(
        x in 0.0f64..1e9,
        formatter in formatter_strategy(),
        opts in options_strategy(),
    ) {
        let formatted = formatter.format(x, &opts);
        prop_assert!(formatter.display(x, &opts).contains(&formatted));
    }

    /// Opening a stored amount in the edit control and saving it again
    /// leaves it unchanged.
    #[test]
    fn edit_control_round_trips(
        cents in 0u64..100_000_000_000,
        thousands in prop::sample::select(vec![",", ".", " "]),
        format in format_strategy(),
    ) {
        let decimal = if thousands == "," { "." } else { "," };
        let field = CurrencyField::new(CurrencyConfig::default().with_locale(thousands, decimal));
        let options = json!({"currency_format": format.as_str()});
        let options = options.as_object().unwrap();
        let stored = Value::String(format!("{}.{:02}", cents / 100, cents % 100));

        let shown = field.input("price", &stored, options).value;
        let saved = field.pre_save(&Value::String(shown), "price", options).unwrap();
        prop_assert_eq!(saved, stored);
    }
}
