//! Core position sizing logic.

use rust_decimal::Decimal;

use super::types::{PositionSizingInput, PositionSizingResult, TradeDirection};

/// Why an input cannot be sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    NonPositiveBalance,
    RiskOutOfRange,
    NonPositiveEntry,
    NonPositiveStop,
    ZeroRiskPerUnit,
    VanishingSize,
    Overflow,
}

impl Rejection {
    const fn as_str(self) -> &'static str {
        match self {
            Self::NonPositiveBalance => "account balance must be positive",
            Self::RiskOutOfRange => "risk percent must be in (0, 100]",
            Self::NonPositiveEntry => "entry price must be positive",
            Self::NonPositiveStop => "stop loss price must be positive",
            Self::ZeroRiskPerUnit => "entry equals stop loss",
            Self::VanishingSize => "risk amount or quantity rounds to zero",
            Self::Overflow => "arithmetic overflow",
        }
    }
}

/// Size a trade from validated parameters.
///
/// Returns `None` when the input is not computable: a non-positive balance,
/// entry or stop, a risk percent outside `(0, 100]`, an entry equal to the stop,
/// a product too large for `Decimal`, or a risk amount or quantity too small
/// to represent. The result is never rounded.
#[must_use]
pub fn compute(input: &PositionSizingInput) -> Option<PositionSizingResult> {
    match try_compute(input) {
        Ok(result) => Some(result),
        Err(rejection) => {
            tracing::trace!(reason = rejection.as_str(), "position not computable");
            None
        }
    }
}

fn try_compute(input: &PositionSizingInput) -> Result<PositionSizingResult, Rejection> {
    check_preconditions(input)?;

    let raw_risk_per_unit = input
        .entry_price
        .checked_sub(input.stop_loss_price)
        .ok_or(Rejection::Overflow)?;
    if raw_risk_per_unit.is_zero() {
        return Err(Rejection::ZeroRiskPerUnit);
    }
    let risk_per_unit = raw_risk_per_unit.abs();

    let risk_amount = input
        .account_balance
        .checked_mul(input.risk_percent / Decimal::ONE_HUNDRED)
        .ok_or(Rejection::Overflow)?;
    let quantity = risk_amount
        .checked_div(risk_per_unit)
        .ok_or(Rejection::Overflow)?;
    if risk_amount <= Decimal::ZERO || quantity <= Decimal::ZERO {
        return Err(Rejection::VanishingSize);
    }
    let direction = TradeDirection::infer(input.entry_price, input.stop_loss_price);

    let (take_profit, potential_profit) = match input.reward_multiple {
        Some(multiple) if multiple > Decimal::ZERO => {
            let target = project_target(input.entry_price, risk_per_unit, multiple, direction)
                .ok_or(Rejection::Overflow)?;
            let profit = risk_amount
                .checked_mul(multiple)
                .ok_or(Rejection::Overflow)?;
            (Some(target), Some(profit))
        }
        _ => (None, None),
    };

    Ok(PositionSizingResult {
        quantity,
        risk_amount,
        risk_per_unit,
        risk_percent: input.risk_percent,
        potential_profit,
        reward_multiple: input.reward_multiple,
        take_profit,
        direction,
    })
}

fn check_preconditions(input: &PositionSizingInput) -> Result<(), Rejection> {
    if input.account_balance <= Decimal::ZERO {
        return Err(Rejection::NonPositiveBalance);
    }

    if input.risk_percent <= Decimal::ZERO || input.risk_percent > Decimal::ONE_HUNDRED {
        return Err(Rejection::RiskOutOfRange);
    }

    if input.entry_price <= Decimal::ZERO {
        return Err(Rejection::NonPositiveEntry);
    }

    if input.stop_loss_price <= Decimal::ZERO {
        return Err(Rejection::NonPositiveStop);
    }

    if input.entry_price == input.stop_loss_price {
        return Err(Rejection::ZeroRiskPerUnit);
    }

    Ok(())
}

/// Take-profit price `multiple` risk units away from entry, on the profitable side.
fn project_target(
    entry_price: Decimal,
    risk_per_unit: Decimal,
    multiple: Decimal,
    direction: TradeDirection,
) -> Option<Decimal> {
    let distance = risk_per_unit.checked_mul(multiple)?;
    match direction {
        TradeDirection::Long => entry_price.checked_add(distance),
        TradeDirection::Short => entry_price.checked_sub(distance),
    }
}
