//! Lenient parsing and display formatting for expense amounts.

use num_format::Locale;
use rust_decimal::{Decimal, RoundingStrategy};

/// The currency prefix for displayed amounts (Malaysian ringgit).
pub const CURRENCY_PREFIX: &str = "RM";

/// The most fraction digits shown for an amount.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Magnitudes below this round to zero.
const SMALLEST_VISIBLE: f64 = 0.0005;

/// Read a number from the start of `text`.
///
/// Leading whitespace is skipped and anything after the longest numeric
/// prefix is ignored, so "50abc" is 50. A signed or unsigned "Infinity" is
/// infinite. Text without a numeric prefix, including the empty string, is NaN.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim_start();
    let prefix = numeric_prefix(text);

    if prefix.is_empty() {
        return parse_infinity(text).unwrap_or(f64::NAN);
    }

    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_infinity(text: &str) -> Option<f64> {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    rest.starts_with("Infinity").then_some(sign * f64::INFINITY)
}

/// The longest prefix of `text` that is a decimal number with an optional
/// sign, fraction and exponent. Empty if `text` does not start with a number.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let count_digits =
        |start: usize| bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let integer_digits = count_digits(end);
    end += integer_digits;
    let mut digit_count = integer_digits;

    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = count_digits(end + 1);

        if digit_count + fraction_digits > 0 {
            end += 1 + fraction_digits;
            digit_count += fraction_digits;
        }
    }

    if digit_count == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }

        let exponent_digits = count_digits(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    &text[..end]
}

/// Format `number` with thousands separators and at most three fraction
/// digits, dropping trailing zeros. Halfway cases round away from zero.
///
/// NaN is formatted as "NaN" and infinities as "∞" or "-∞".
pub fn format_locale_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }

    if number.is_infinite() {
        return if number < 0.0 { "-∞" } else { "∞" }.to_owned();
    }

    let rounded = round_fraction(number.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let integer = group_thousands(integer);

    let is_zero = integer == "0" && fraction.is_empty();
    let sign = if number < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    }
}

/// The decimal digits of the non-negative `number` rounded to
/// [MAX_FRACTION_DIGITS] places, e.g. "1.063" for 1.0625.
///
/// Rounding starts from the shortest decimal that reads back as `number`, so
/// 1.0005 becomes "1.001" even though the stored float is slightly smaller.
fn round_fraction(number: f64) -> String {
    if number < SMALLEST_VISIBLE {
        return "0".to_owned();
    }

    let shortest = number.to_string();

    match shortest.parse::<Decimal>() {
        Ok(decimal) => decimal
            .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        // Beyond the range of `Decimal` every float is a whole number.
        Err(_) => shortest,
    }
}

/// Insert the en locale separator between every three digits of `digits`.
fn group_thousands(digits: &str) -> String {
    let separator = Locale::en.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }

    grouped
}

/// Format `number` as a ringgit amount, e.g. "RM 1,234.5".
pub fn format_ringgit(number: f64) -> String {
    format!("{CURRENCY_PREFIX} {}", format_locale_number(number))
}
