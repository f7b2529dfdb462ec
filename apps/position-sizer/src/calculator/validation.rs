//! First-failure-wins validation of a parsed calculator form.

use rust_decimal::Decimal;
use thiserror::Error;

use super::form::{FieldKey, ParsedForm};
use crate::sizing::PositionSizingInput;

/// Reason a form cannot be sized, one per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Balance missing or not positive.
    #[error("Account balance must be a positive number")]
    AccountBalance,
    /// Risk missing or outside `(0, 100]`.
    #[error("Risk % must be between 0 and 100")]
    RiskPercent,
    /// Entry missing or not positive.
    #[error("Entry price must be a positive number")]
    EntryPrice,
    /// Stop missing or not positive.
    #[error("Stop loss price must be a positive number")]
    StopLossPrice,
    /// Entry and stop are equal.
    #[error("Entry price and stop loss price cannot be the same")]
    SamePrices,
    /// Ratio supplied but not positive.
    #[error("Risk/reward ratio must be positive when provided")]
    RewardMultiple,
}

impl ValidationError {
    /// Field the error should be shown against.
    #[must_use]
    pub const fn field(&self) -> FieldKey {
        match self {
            Self::AccountBalance => FieldKey::AccountBalance,
            Self::RiskPercent => FieldKey::RiskPercent,
            Self::EntryPrice | Self::SamePrices => FieldKey::EntryPrice,
            Self::StopLossPrice => FieldKey::StopLossPrice,
            Self::RewardMultiple => FieldKey::RiskReward,
        }
    }
}

/// Check a parsed form and turn it into engine input.
///
/// Rules run in field order and only the first failure is reported.
pub fn validate(parsed: &ParsedForm) -> Result<PositionSizingInput, ValidationError> {
    let account_balance = parsed
        .account_balance
        .filter(|v| *v > Decimal::ZERO)
        .ok_or(ValidationError::AccountBalance)?;

    let risk_percent = parsed
        .risk_percent
        .filter(|v| *v > Decimal::ZERO && *v <= Decimal::ONE_HUNDRED)
        .ok_or(ValidationError::RiskPercent)?;

    let entry_price = parsed
        .entry_price
        .filter(|v| *v > Decimal::ZERO)
        .ok_or(ValidationError::EntryPrice)?;

    let stop_loss_price = parsed
        .stop_loss_price
        .filter(|v| *v > Decimal::ZERO)
        .ok_or(ValidationError::StopLossPrice)?;

    if entry_price == stop_loss_price {
        return Err(ValidationError::SamePrices);
    }

    if parsed.reward_multiple.is_some_and(|m| m <= Decimal::ZERO) {
        return Err(ValidationError::RewardMultiple);
    }

    Ok(PositionSizingInput {
        account_balance,
        risk_percent,
        entry_price,
        stop_loss_price,
        reward_multiple: parsed.reward_multiple,
    })
}
