//! Position sizing for a single trade.
//!
//! Converts an account-level risk budget into a unit quantity:
//! - `risk_amount = account_balance * risk_percent / 100`
//! - `risk_per_unit = |entry_price - stop_loss_price|`
//! - `quantity = risk_amount / risk_per_unit`
//!
//! A positive reward multiple additionally projects a take-profit price and
//! the potential profit. Direction is long when the stop sits below entry.
//!
//! # Example
//!
//! ```rust
//! use position_sizer::sizing::{PositionSizingInput, TradeDirection, compute, parse_reward_ratio};
//! use rust_decimal_macros::dec;
//!
//! let input = PositionSizingInput {
//!     account_balance: dec!(100000),
//!     risk_percent: dec!(2),
//!     entry_price: dec!(100),
//!     stop_loss_price: dec!(95),
//!     reward_multiple: parse_reward_ratio("1:2"),
//! };
//!
//! let result = compute(&input).unwrap();
//! assert_eq!(result.quantity, dec!(400)); // 2% of 100k = 2000 / 5 per unit
//! assert_eq!(result.take_profit, Some(dec!(110)));
//! assert_eq!(result.direction, TradeDirection::Long);
//! ```

mod engine;
mod format;
mod ratio;
mod types;

pub use engine::compute;
pub use format::{
    PLACEHOLDER, format_currency, format_multiple, format_percent, format_price, format_quantity,
    format_ratio,
};
pub(crate) use ratio::parse_number;
pub use ratio::parse_reward_ratio;
pub use types::{PositionSizingInput, PositionSizingResult, TradeDirection};
