//! Display rows for a sizing result.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::sizing::{
    PLACEHOLDER, PositionSizingResult, format_currency, format_multiple, format_percent,
    format_price, format_quantity, format_ratio,
};

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// Row label.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

impl ResultRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Formatted rendering of a [`PositionSizingResult`].
///
/// Built from the exact result; nothing here is recomputed from rounded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    /// Headline quantity to trade.
    pub quantity: String,
    /// Supporting stats in display order.
    pub rows: Vec<ResultRow>,
}

impl ResultView {
    /// Label of the headline quantity.
    pub const QUANTITY_LABEL: &'static str = "Quantity to Trade";

    /// Build the view for a result.
    #[must_use]
    pub fn from_result(result: &PositionSizingResult) -> Self {
        let rows = vec![
            ResultRow::new("Risk Amount", format_currency(Some(result.risk_amount))),
            ResultRow::new(
                "Risk Per Unit",
                format!("${}", format_price(Some(result.risk_per_unit))),
            ),
            ResultRow::new("Risk %", format_percent(result.risk_percent)),
            ResultRow::new("Potential Profit", format_currency(result.potential_profit)),
            ResultRow::new(
                "Take Profit",
                non_zero(result.take_profit).map_or_else(
                    || PLACEHOLDER.to_string(),
                    |tp| format!("${}", format_price(Some(tp))),
                ),
            ),
            ResultRow::new(
                "Risk/Reward",
                format_ratio(result.reward_multiple).unwrap_or_else(|| PLACEHOLDER.to_string()),
            ),
            ResultRow::new("Directional Bias", result.direction.bias_label()),
            ResultRow::new(
                "Reward Multiple",
                non_zero(result.reward_multiple)
                    .map_or_else(|| PLACEHOLDER.to_string(), format_multiple),
            ),
        ];

        Self {
            quantity: format_quantity(result.quantity),
            rows,
        }
    }

    /// Look up a row value by label.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

impl From<&PositionSizingResult> for ResultView {
    fn from(result: &PositionSizingResult) -> Self {
        Self::from_result(result)
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.label.len())
            .chain(std::iter::once(Self::QUANTITY_LABEL.len()))
            .max()
            .unwrap_or_default();

        writeln!(f, "{:<width$}  {}", Self::QUANTITY_LABEL, self.quantity)?;
        for row in &self.rows {
            writeln!(f, "{:<width$}  {}", row.label, row.value)?;
        }
        Ok(())
    }
}

fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}
