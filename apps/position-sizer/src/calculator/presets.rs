//! Quick-pick values offered next to the calculator fields.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::form::{CalculatorForm, FieldKey};

const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A field value with its short button label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Field this preset belongs to.
    pub field: FieldKey,
    /// Text written into the field.
    pub value: String,
    /// Short label (`100K`, `2%`, `1:3`).
    pub label: String,
}

impl Preset {
    /// Balance preset labelled in thousands or millions.
    #[must_use]
    pub fn account_balance(amount: Decimal) -> Self {
        let label = if amount >= MILLION {
            format!("{}M", (amount / MILLION).normalize())
        } else {
            let thousands = (amount / THOUSAND)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            format!("{thousands}K")
        };

        Self {
            field: FieldKey::AccountBalance,
            value: amount.normalize().to_string(),
            label,
        }
    }

    /// Risk preset labelled as a percentage.
    #[must_use]
    pub fn risk_percent(percent: Decimal) -> Self {
        let value = percent.normalize().to_string();
        Self {
            field: FieldKey::RiskPercent,
            label: format!("{value}%"),
            value,
        }
    }

    /// Ratio preset labelled with its own text.
    #[must_use]
    pub fn risk_reward(ratio: &str) -> Self {
        Self {
            field: FieldKey::RiskReward,
            value: ratio.to_string(),
            label: ratio.to_string(),
        }
    }

    /// Whether the form currently holds this preset's value.
    #[must_use]
    pub fn is_active(&self, form: &CalculatorForm) -> bool {
        form.get(self.field) == self.value
    }

    /// Write this preset into the form.
    pub fn apply(&self, form: &mut CalculatorForm) {
        form.set(self.field, self.value.clone());
    }
}
