// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp))]

//! Position Sizer - Rust Core Library
//!
//! Risk-based position sizing for a single trade.
//!
//! # Layers (inside → outside)
//!
//! - **sizing**: the pure engine. `compute` turns validated numbers into a
//!   quantity, dollar risk, direction and optional take-profit; no state, no
//!   rounding, `None` when the input is not computable.
//! - **calculator**: the caller layer. Raw text form, first-failure-wins
//!   validation with user-facing messages, presets and the result view.
//! - **config** / **telemetry**: YAML configuration and tracing setup used by
//!   the `position-sizer` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Pure position sizing engine and formatting helpers.
pub mod sizing;

/// Form parsing, validation and presentation around the engine.
pub mod calculator;

/// YAML configuration loading.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

pub use calculator::{Calculator, CalculatorError, CalculatorForm, FieldKey, ResultView};
pub use sizing::{
    PositionSizingInput, PositionSizingResult, TradeDirection, compute, parse_reward_ratio,
};
