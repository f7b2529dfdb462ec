//! Core types for position sizing calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction inferred from which side of the entry the stop sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    /// Stop below entry (buy to open).
    Long,
    /// Stop above entry (sell to open).
    Short,
}

impl TradeDirection {
    /// Infer the direction from entry and stop-loss prices.
    ///
    /// Equal prices resolve to `Short`; callers reject that case before sizing.
    #[must_use]
    pub fn infer(entry_price: Decimal, stop_loss_price: Decimal) -> Self {
        if entry_price > stop_loss_price {
            Self::Long
        } else {
            Self::Short
        }
    }

    /// Human-readable bias label.
    #[must_use]
    pub const fn bias_label(&self) -> &'static str {
        match self {
            Self::Long => "Long (bullish)",
            Self::Short => "Short (bearish)",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

/// Input parameters for position sizing calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSizingInput {
    /// Account balance in dollars.
    pub account_balance: Decimal,
    /// Percentage of the balance to risk, in `(0, 100]`.
    pub risk_percent: Decimal,
    /// Planned entry price.
    pub entry_price: Decimal,
    /// Stop-loss price.
    pub stop_loss_price: Decimal,
    /// Reward units targeted per unit of risk (`None` = no target requested).
    pub reward_multiple: Option<Decimal>,
}

/// Result of position sizing calculation.
///
/// Values are unrounded; rounding belongs to the formatting helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSizingResult {
    /// Units to trade.
    pub quantity: Decimal,
    /// Dollars at risk if the stop is hit.
    pub risk_amount: Decimal,
    /// Absolute distance between entry and stop.
    pub risk_per_unit: Decimal,
    /// Risk percentage echoed from the input.
    pub risk_percent: Decimal,
    /// Profit if the take-profit is reached.
    pub potential_profit: Option<Decimal>,
    /// Reward multiple echoed from the input.
    pub reward_multiple: Option<Decimal>,
    /// Price at which the targeted reward multiple is realised.
    pub take_profit: Option<Decimal>,
    /// Directional bias of the setup.
    pub direction: TradeDirection,
}

impl PositionSizingResult {
    /// Whether a profit target was computed.
    #[must_use]
    pub const fn has_target(&self) -> bool {
        self.take_profit.is_some()
    }
}
