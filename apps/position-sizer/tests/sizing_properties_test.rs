//! Property tests for the sizing engine and ratio helpers.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rust_decimal::Decimal;

use position_sizer::sizing::{
    PositionSizingInput, TradeDirection, compute, format_ratio, parse_reward_ratio,
};

/// Cents in `[0.01, 10_000_000.00]`.
fn balance() -> impl Strategy<Value = Decimal> {
    (1_i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Risk percent in `[0.01, 100.00]`.
fn risk_percent() -> impl Strategy<Value = Decimal> {
    (1_i64..=10_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Price in `[0.01, 10_000.00]`.
fn price() -> impl Strategy<Value = Decimal> {
    (1_i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Reward multiple in `[-5.00, 10.00]`, zero and negatives included.
fn multiple() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((-500_i64..=1_000).prop_map(|hundredths| Decimal::new(hundredths, 2)))
}

prop_compose! {
    fn valid_input()(
        account_balance in balance(),
        risk_percent in risk_percent(),
        entry_price in price(),
        stop_loss_price in price(),
        reward_multiple in multiple(),
    ) -> PositionSizingInput {
        PositionSizingInput {
            account_balance,
            risk_percent,
            entry_price,
            stop_loss_price,
            reward_multiple,
        }
    }
}

proptest! {
    #[test]
    fn quantity_is_risk_amount_over_risk_per_unit(input in valid_input()) {
        prop_assume!(input.entry_price != input.stop_loss_price);

        let result = compute(&input).unwrap();
        let risk_amount = input.account_balance * (input.risk_percent / Decimal::ONE_HUNDRED);
        let risk_per_unit = (input.entry_price - input.stop_loss_price).abs();

        prop_assert_eq!(result.risk_amount, risk_amount);
        prop_assert_eq!(result.risk_per_unit, risk_per_unit);
        prop_assert_eq!(result.quantity, risk_amount / risk_per_unit);
        prop_assert!(result.quantity > Decimal::ZERO);
        prop_assert_eq!(result.risk_percent, input.risk_percent);
    }

    #[test]
    fn direction_is_long_iff_entry_above_stop(input in valid_input()) {
        prop_assume!(input.entry_price != input.stop_loss_price);

        let result = compute(&input).unwrap();
        prop_assert_eq!(
            result.direction == TradeDirection::Long,
            input.entry_price > input.stop_loss_price
        );
    }

    #[test]
    fn equal_prices_are_not_computable(
        account_balance in balance(),
        risk_percent in risk_percent(),
        entry_price in price(),
    ) {
        let input = PositionSizingInput {
            account_balance,
            risk_percent,
            entry_price,
            stop_loss_price: entry_price,
            reward_multiple: None,
        };
        prop_assert!(compute(&input).is_none());
    }

    #[test]
    fn target_follows_reward_multiple(input in valid_input()) {
        prop_assume!(input.entry_price != input.stop_loss_price);

        let result = compute(&input).unwrap();
        match input.reward_multiple {
            Some(r) if r > Decimal::ZERO => {
                let distance = result.risk_per_unit * r;
                let expected = match result.direction {
                    TradeDirection::Long => input.entry_price + distance,
                    TradeDirection::Short => input.entry_price - distance,
                };
                prop_assert_eq!(result.take_profit, Some(expected));
                prop_assert_eq!(result.potential_profit, Some(result.risk_amount * r));
            }
            _ => {
                prop_assert!(result.take_profit.is_none());
                prop_assert!(result.potential_profit.is_none());
            }
        }
        prop_assert_eq!(result.reward_multiple, input.reward_multiple);
    }

    #[test]
    fn formatted_ratio_parses_back_within_a_cent(risk in 1_i64..=100, reward in 1_i64..=1_000) {
        let text = format!("{risk}:{reward}");
        let multiple = parse_reward_ratio(&text).unwrap();

        let label = format_ratio(Some(multiple)).unwrap();
        let reparsed = parse_reward_ratio(&label).unwrap();

        prop_assert!((reparsed - multiple).abs() < Decimal::new(1, 2));
    }
}
