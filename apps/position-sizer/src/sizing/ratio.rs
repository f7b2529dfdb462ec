//! Risk:reward ratio parsing.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

/// Parse a `"risk:reward"` string into a reward multiple.
///
/// `"1:2"` yields `2`, `"2:5"` yields `2.5`. Each side is read up to its first
/// non-numeric character, so `"1:2x"` also yields `2`. Returns `None` for empty
/// input, anything other than exactly one colon, a side without a leading
/// number, or a side that is not strictly positive.
#[must_use]
pub fn parse_reward_ratio(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = trimmed.split(':');
    let (Some(risk), Some(reward), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let risk = parse_number(risk)?;
    let reward = parse_number(reward)?;

    if risk <= Decimal::ZERO || reward <= Decimal::ZERO {
        return None;
    }

    reward.checked_div(risk)
}

/// Parse the leading number of a trimmed string, ignoring anything after it.
///
/// `"100abc"` yields `100` and `".5"` yields `0.5`; text without a leading
/// digit (`"abc"`, `"Infinity"`) or a value outside `Decimal` yields `None`.
pub(crate) fn parse_number(text: &str) -> Option<Decimal> {
    let caps = leading_number().captures(text.trim())?;

    let sign = if &caps[1] == "-" { "-" } else { "" };
    let integer = caps.get(2).map_or("0", |m| m.as_str());
    let fraction = caps.get(3).or_else(|| caps.get(4)).map_or("", |m| m.as_str());

    let mut literal = format!("{sign}{integer}");
    if !fraction.is_empty() {
        literal.push('.');
        literal.push_str(fraction);
    }

    match caps.get(5) {
        Some(exponent) => {
            let exponent = exponent.as_str().trim_start_matches('+');
            Decimal::from_scientific(&format!("{literal}e{exponent}")).ok()
        }
        None => Decimal::from_str(&literal).ok(),
    }
}

/// Sign, integer digits, fraction digits (with or without integer part), exponent.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn leading_number() -> &'static Regex {
    static LEADING_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

    LEADING_NUMBER_REGEX.get_or_init(|| {
        Regex::new(r"^([+-]?)(?:([0-9]+)(?:\.([0-9]*))?|\.([0-9]+))(?:[eE]([+-]?[0-9]+))?")
            .expect("leading number regex is valid")
    })
}
