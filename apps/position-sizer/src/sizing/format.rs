//! Formatting utilities for position sizing display.
//!
//! Rounding happens here and only here; the engine's numbers stay exact.

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of an absent value.
pub const PLACEHOLDER: &str = "—";

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Format an optional dollar amount as `$1,234.56`.
///
/// Rounds half away from zero to cents and always shows two fraction digits.
#[must_use]
pub fn format_currency(value: Option<Decimal>) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };

    let rounded = round_cents(value);
    let body = with_grouping(&format!("{:.2}", rounded.abs()));
    format!("{}${body}", sign_of(rounded))
}

/// Format a unit quantity with thousands separators and 0-2 fraction digits.
#[must_use]
pub fn format_quantity(value: Decimal) -> String {
    let rounded = round_cents(value).normalize();
    let body = with_grouping(&rounded.abs().to_string());
    format!("{}{body}", sign_of(rounded))
}

/// Format an optional price with exactly two decimals, rounding half up.
#[must_use]
pub fn format_price(value: Option<Decimal>) -> String {
    value.map_or_else(
        || PLACEHOLDER.to_string(),
        |v| format!("{:.2}", round_half_up(v)),
    )
}

/// Format a reward multiple as a `1:r` label.
///
/// Returns `None` for an absent multiple so the caller can pick a placeholder.
#[must_use]
pub fn format_ratio(multiple: Option<Decimal>) -> Option<String> {
    multiple.map(|m| format!("1:{}", round_half_up(m).normalize()))
}

/// Format a percentage with two decimals (`2.00%`).
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", round_cents(value))
}

/// Format a reward multiple with two decimals (`2.00x`).
#[must_use]
pub fn format_multiple(value: Decimal) -> String {
    format!("{:.2}x", round_cents(value))
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `floor(value * 100 + 0.5) / 100`, so negative midpoints round toward zero.
fn round_half_up(value: Decimal) -> Decimal {
    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_add(HALF))
        .map_or_else(
            || round_cents(value),
            |shifted| shifted.floor() / Decimal::ONE_HUNDRED,
        )
}

fn sign_of(rounded: Decimal) -> &'static str {
    if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    }
}

/// Insert `,` every three integer digits of an unsigned decimal string.
fn with_grouping(unsigned: &str) -> String {
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let len = integer.len();
    let mut out = String::with_capacity(unsigned.len() + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
