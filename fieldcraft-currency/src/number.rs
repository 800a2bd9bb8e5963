//! Decimal rounding and digit grouping.
//!
//! Amounts travel as plain decimal text (`-1234.5`, no exponent, no
//! grouping). Rounding goes through `Decimal` when the digits fit its
//! mantissa and falls back to digit-wise rounding when they don't, so the
//! result always carries exactly the requested fractional digits.

use crate::format::Separators;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Most significant digits a `Decimal` holds without loss.
const DECIMAL_DIGITS: usize = 28;

/// Validate cleaned input: digits with at most one `.`, at least one digit.
/// `.5` and `5.` are completed to `0.5` and `5.0`.
pub(crate) fn plain_number(s: &str) -> Option<String> {
    let digits = s.bytes().filter(u8::is_ascii_digit).count();
    let dots = s.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != s.len() {
        return None;
    }
    let mut padded = String::with_capacity(s.len() + 2);
    if s.starts_with('.') {
        padded.push('0');
    }
    padded.push_str(s);
    if s.ends_with('.') {
        padded.push('0');
    }
    Some(padded)
}

/// Plain text of a finite float, using its shortest round-tripping digits.
pub(crate) fn plain_from_f64(value: f64) -> Option<String> {
    value.is_finite().then(|| value.to_string())
}

/// Round plain decimal text half away from zero to exactly `scale`
/// fractional digits. No point is emitted when `scale` is 0.
pub(crate) fn round(plain: &str, scale: u32) -> String {
    let significant = plain.bytes().filter(u8::is_ascii_digit).count();
    if significant <= DECIMAL_DIGITS
        && let Ok(value) = Decimal::from_str(plain)
    {
        let mut rounded =
            value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(scale);
        if rounded.scale() == scale {
            return rounded.to_string();
        }
    }
    round_digits(plain, scale as usize)
}

fn round_digits(plain: &str, scale: usize) -> String {
    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(scale))
        .collect();
    let round_up = frac_part.as_bytes().get(scale).is_some_and(|&d| d >= b'5');

    let mut int_len = int_part.len();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let (int_digits, frac_digits) = digits.split_at(int_len);
    let first_significant = int_digits
        .iter()
        .position(|&d| d != b'0')
        .unwrap_or(int_digits.len());
    let int_digits = &int_digits[first_significant..];

    let mut out = String::with_capacity(digits.len() + 3);
    if negative {
        out.push('-');
    }
    if int_digits.is_empty() {
        out.push('0');
    } else {
        out.extend(int_digits.iter().map(|&d| char::from(d)));
    }
    if scale > 0 {
        out.push('.');
        out.extend(frac_digits.iter().map(|&d| char::from(d)));
    }
    out
}

/// Insert thousands separators into rounded plain text and swap in the
/// decimal separator. A value of all zeros never carries a minus sign.
pub(crate) fn group(plain: &str, separators: Separators<'_>) -> String {
    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3 + 1);
    if negative && unsigned.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separators.thousands);
        }
        out.push(c);
    }
    if !frac_part.is_empty() {
        out.push_str(separators.decimal);
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: Separators<'static> = Separators::new(",", ".");

    #[test]
    fn plain_number_accepts_single_point() {
        assert_eq!(plain_number("1234.50").as_deref(), Some("1234.50"));
        assert_eq!(plain_number(".5").as_deref(), Some("0.5"));
        assert_eq!(plain_number("5.").as_deref(), Some("5.0"));
        assert_eq!(plain_number("007").as_deref(), Some("007"));
    }

    #[test]
    fn plain_number_rejects_non_numbers() {
        assert_eq!(plain_number("."), None);
        assert_eq!(plain_number("1.2.3"), None);
        assert_eq!(plain_number(""), None);
        assert_eq!(plain_number("12a"), None);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round("1.25", 1), "1.3");
        assert_eq!(round("-1.25", 1), "-1.3");
        assert_eq!(round("0.5", 0), "1");
        assert_eq!(round("007", 0), "7");
    }

    #[test]
    fn round_pads_to_scale() {
        assert_eq!(round("12", 2), "12.00");
        assert_eq!(round("0", 3), "0.000");
    }

    #[test]
    fn round_beyond_decimal_range_keeps_scale() {
        let nines = "9".repeat(27);
        assert_eq!(round(&nines, 2), format!("{nines}.00"));
        assert_eq!(round(&"9".repeat(30), 2), format!("{}.00", "9".repeat(30)));
        assert_eq!(round("0.5", 40), format!("0.5{}", "0".repeat(39)));
    }

    #[test]
    fn round_digits_carries() {
        assert_eq!(round_digits("999.995", 2), "1000.00");
        assert_eq!(round_digits("-0.996", 2), "-1.00");
        assert_eq!(round_digits("0.004", 2), "0.00");
        assert_eq!(round_digits("12.5", 0), "13");
        assert_eq!(round_digits("0012.30", 1), "12.3");
    }

    #[test]
    fn plain_from_f64_uses_shortest_repr() {
        assert_eq!(plain_from_f64(1.005).as_deref(), Some("1.005"));
        assert_eq!(plain_from_f64(5e28).as_deref(), Some("50000000000000000000000000000"));
        assert_eq!(plain_from_f64(f64::NAN), None);
        assert_eq!(plain_from_f64(f64::INFINITY), None);
    }

    #[test]
    fn group_inserts_thousands() {
        assert_eq!(group("1234567.89", EN), "1,234,567.89");
        assert_eq!(group("100", EN), "100");
        assert_eq!(group("1000", EN), "1,000");
        assert_eq!(group("-1234.5", EN), "-1,234.5");
    }

    #[test]
    fn group_drops_sign_of_zero() {
        assert_eq!(group("-0.00", EN), "0.00");
        assert_eq!(group(&round("-0.001", 2), EN), "0.00");
    }

    #[test]
    fn group_with_empty_thousands() {
        let seps = Separators::new("", ",");
        assert_eq!(group("1234.50", seps), "1234,50");
    }
}
