//! Preset values offered for the calculator fields.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculator::{FieldKey, Preset};

/// Preset configuration, one list per field that offers quick picks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetsConfig {
    /// Account balances in dollars.
    #[serde(default = "default_account_balance")]
    pub account_balance: Vec<Decimal>,
    /// Risk percentages.
    #[serde(default = "default_risk_percent")]
    pub risk_percent: Vec<Decimal>,
    /// Risk:reward ratio strings.
    #[serde(default = "default_risk_reward")]
    pub risk_reward: Vec<String>,
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            account_balance: default_account_balance(),
            risk_percent: default_risk_percent(),
            risk_reward: default_risk_reward(),
        }
    }
}

impl PresetsConfig {
    /// Presets for one field, empty for fields without quick picks.
    #[must_use]
    pub fn for_field(&self, field: FieldKey) -> Vec<Preset> {
        match field {
            FieldKey::AccountBalance => self
                .account_balance
                .iter()
                .copied()
                .map(Preset::account_balance)
                .collect(),
            FieldKey::RiskPercent => self
                .risk_percent
                .iter()
                .copied()
                .map(Preset::risk_percent)
                .collect(),
            FieldKey::RiskReward => self
                .risk_reward
                .iter()
                .map(|ratio| Preset::risk_reward(ratio))
                .collect(),
            FieldKey::EntryPrice | FieldKey::StopLossPrice => Vec::new(),
        }
    }
}

fn default_account_balance() -> Vec<Decimal> {
    vec![dec!(100000), dec!(300000), dec!(500000), dec!(1000000)]
}

fn default_risk_percent() -> Vec<Decimal> {
    vec![dec!(0.5), dec!(1), dec!(2), dec!(3), dec!(5)]
}

fn default_risk_reward() -> Vec<String> {
    vec!["1:2".to_string(), "1:3".to_string(), "1:5".to_string()]
}
