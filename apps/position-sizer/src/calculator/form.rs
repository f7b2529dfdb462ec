//! Raw calculator form fields and their numeric parse.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::sizing::{parse_number, parse_reward_ratio};

/// Identifies one of the five calculator fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// Account balance in dollars.
    AccountBalance,
    /// Percentage of the balance at risk.
    RiskPercent,
    /// Entry price.
    EntryPrice,
    /// Stop-loss price.
    StopLossPrice,
    /// Risk:reward ratio text.
    RiskReward,
}

impl FieldKey {
    /// All fields in display order.
    pub const ALL: [Self; 5] = [
        Self::AccountBalance,
        Self::RiskPercent,
        Self::EntryPrice,
        Self::StopLossPrice,
        Self::RiskReward,
    ];

    /// Field label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AccountBalance => "Account Balance ($)",
            Self::RiskPercent => "Risk % (higher = riskier trade)",
            Self::EntryPrice => "Entry Price ($)",
            Self::StopLossPrice => "Stop Loss Price ($)",
            Self::RiskReward => "Risk/Reward Ratio",
        }
    }

    /// Example input shown while the field is empty.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::AccountBalance => "e.g., 10000",
            Self::RiskPercent => "e.g., 2",
            Self::EntryPrice => "e.g., 100",
            Self::StopLossPrice => "e.g., 95",
            Self::RiskReward => "e.g., 1:2 or 1:3",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountBalance => write!(f, "account_balance"),
            Self::RiskPercent => write!(f, "risk_percent"),
            Self::EntryPrice => write!(f, "entry_price"),
            Self::StopLossPrice => write!(f, "stop_loss_price"),
            Self::RiskReward => write!(f, "risk_reward"),
        }
    }
}

/// Text as typed into the calculator, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorForm {
    /// Account balance text.
    #[serde(deserialize_with = "text_field")]
    pub account_balance: String,
    /// Risk percent text.
    #[serde(deserialize_with = "text_field")]
    pub risk_percent: String,
    /// Entry price text.
    #[serde(deserialize_with = "text_field")]
    pub entry_price: String,
    /// Stop-loss price text.
    #[serde(deserialize_with = "text_field")]
    pub stop_loss_price: String,
    /// Risk:reward ratio text (empty = no target).
    pub risk_reward: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            account_balance: "100000".to_string(),
            risk_percent: "2".to_string(),
            entry_price: "100".to_string(),
            stop_loss_price: "95".to_string(),
            risk_reward: "1:2".to_string(),
        }
    }
}

impl CalculatorForm {
    /// Current text of a field.
    #[must_use]
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::AccountBalance => &self.account_balance,
            FieldKey::RiskPercent => &self.risk_percent,
            FieldKey::EntryPrice => &self.entry_price,
            FieldKey::StopLossPrice => &self.stop_loss_price,
            FieldKey::RiskReward => &self.risk_reward,
        }
    }

    /// Replace the text of a field.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::AccountBalance => &mut self.account_balance,
            FieldKey::RiskPercent => &mut self.risk_percent,
            FieldKey::EntryPrice => &mut self.entry_price,
            FieldKey::StopLossPrice => &mut self.stop_loss_price,
            FieldKey::RiskReward => &mut self.risk_reward,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`CalculatorForm::set`].
    #[must_use]
    pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Parse every field into a number.
    ///
    /// Unparseable numeric fields become `None`. A blank ratio means no target;
    /// a non-blank ratio that does not parse falls back to a 1:1 multiple.
    #[must_use]
    pub fn parse(&self) -> ParsedForm {
        ParsedForm {
            account_balance: parse_number(&self.account_balance),
            risk_percent: parse_number(&self.risk_percent),
            entry_price: parse_number(&self.entry_price),
            stop_loss_price: parse_number(&self.stop_loss_price),
            reward_multiple: parse_ratio_field(&self.risk_reward),
        }
    }
}

/// Numeric view of a [`CalculatorForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedForm {
    /// Parsed account balance.
    pub account_balance: Option<Decimal>,
    /// Parsed risk percent.
    pub risk_percent: Option<Decimal>,
    /// Parsed entry price.
    pub entry_price: Option<Decimal>,
    /// Parsed stop-loss price.
    pub stop_loss_price: Option<Decimal>,
    /// Reward multiple derived from the ratio text.
    pub reward_multiple: Option<Decimal>,
}

/// Accept bare numbers as field text, so `entry_price: 100` works in YAML.
fn text_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        String(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::String(s) => s,
        Text::Integer(i) => i.to_string(),
        Text::Float(f) => f.to_string(),
    })
}

fn parse_ratio_field(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(parse_reward_ratio(trimmed).unwrap_or(Decimal::ONE))
}

/// Hint under the risk field, e.g. `Risking ~2.00% of account balance`.
#[must_use]
pub fn risk_helper(risk_percent: &str) -> Option<String> {
    parse_number(risk_percent).map(|p| {
        format!(
            "Risking ~{} of account balance",
            crate::sizing::format_percent(p)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_form_parses() {
        let parsed = CalculatorForm::default().parse();

        assert_eq!(parsed.account_balance, Some(dec!(100000)));
        assert_eq!(parsed.risk_percent, Some(dec!(2)));
        assert_eq!(parsed.entry_price, Some(dec!(100)));
        assert_eq!(parsed.stop_loss_price, Some(dec!(95)));
        assert_eq!(parsed.reward_multiple, Some(dec!(2)));
    }

    #[test]
    fn blank_ratio_means_no_target() {
        let parsed = CalculatorForm::default()
            .with(FieldKey::RiskReward, "   ")
            .parse();
        assert_eq!(parsed.reward_multiple, None);
    }

    #[test]
    fn malformed_ratio_falls_back_to_one() {
        let parsed = CalculatorForm::default()
            .with(FieldKey::RiskReward, "abc")
            .parse();
        assert_eq!(parsed.reward_multiple, Some(Decimal::ONE));
    }

    #[test]
    fn unparseable_numbers_are_absent() {
        let parsed = CalculatorForm::default()
            .with(FieldKey::AccountBalance, "")
            .with(FieldKey::EntryPrice, "ten")
            .parse();
        assert_eq!(parsed.account_balance, None);
        assert_eq!(parsed.entry_price, None);
        assert_eq!(parsed.stop_loss_price, Some(dec!(95)));
    }

    #[test]
    fn get_and_set_round_trip_every_field() {
        let mut form = CalculatorForm::default();
        for key in FieldKey::ALL {
            form.set(key, key.to_string());
            assert_eq!(form.get(key), key.to_string());
        }
    }

    #[test]
    fn risk_helper_text() {
        assert_eq!(
            risk_helper("2").as_deref(),
            Some("Risking ~2.00% of account balance")
        );
        assert_eq!(
            risk_helper("0.5").as_deref(),
            Some("Risking ~0.50% of account balance")
        );
        assert_eq!(risk_helper("abc"), None);
    }

    #[test]
    fn form_deserializes_with_defaults() {
        let form: CalculatorForm = serde_json::from_str(r#"{"entry_price": "250"}"#).unwrap();
        assert_eq!(form.entry_price, "250");
        assert_eq!(form.stop_loss_price, "95");
    }

    #[test]
    fn form_accepts_bare_numbers() {
        let form: CalculatorForm =
            serde_json::from_str(r#"{"account_balance": 50000, "risk_percent": 1.5}"#).unwrap();
        assert_eq!(form.account_balance, "50000");
        assert_eq!(form.risk_percent, "1.5");
        assert_eq!(form.parse().risk_percent, Some(dec!(1.5)));
    }
}
