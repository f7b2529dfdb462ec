//! Calculator caller layer around the sizing engine.
//!
//! Owns everything between raw text and a rendered result:
//! - `form`: the five text fields and their numeric parse
//! - `validation`: first-failure-wins checks with user-facing messages
//! - `view`: display rows for a result
//! - `presets`: quick-pick field values
//!
//! Validation and the engine's own precondition checks are independent layers;
//! an engine `None` after successful validation surfaces as
//! [`CalculatorError::Uncomputable`].

mod form;
mod presets;
mod validation;
mod view;

use thiserror::Error;

use crate::sizing::{self, PositionSizingResult};

pub use form::{CalculatorForm, FieldKey, ParsedForm, risk_helper};
pub use presets::Preset;
pub use validation::{ValidationError, validate};
pub use view::{ResultRow, ResultView};

/// Why the calculator produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The form failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The engine rejected input that passed validation.
    #[error("Unable to calculate risk/reward with the provided inputs")]
    Uncomputable,
}

/// Stateless parse, validate and size pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Size the trade described by a form.
    pub fn calculate(
        &self,
        form: &CalculatorForm,
    ) -> Result<PositionSizingResult, CalculatorError> {
        let input = validate(&form.parse()).inspect_err(|e| {
            tracing::debug!(field = %e.field(), error = %e, "form rejected");
        })?;

        let result = sizing::compute(&input).ok_or(CalculatorError::Uncomputable)?;

        tracing::debug!(
            quantity = %result.quantity,
            risk_amount = %result.risk_amount,
            direction = %result.direction,
            has_target = result.has_target(),
            "position sized"
        );

        Ok(result)
    }

    /// Size the trade and render it for display.
    pub fn render(&self, form: &CalculatorForm) -> Result<ResultView, CalculatorError> {
        self.calculate(form).map(|result| ResultView::from_result(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_form_sizes() {
        let result = Calculator::new()
            .calculate(&CalculatorForm::default())
            .unwrap();
        assert_eq!(result.quantity, dec!(400));
        assert_eq!(result.take_profit, Some(dec!(110)));
    }

    #[test]
    fn target_follows_ratio_field() {
        let calculator = Calculator::new();

        let with_ratio = calculator.calculate(&CalculatorForm::default()).unwrap();
        assert!(with_ratio.has_target());

        let without_ratio = calculator
            .calculate(&CalculatorForm::default().with(FieldKey::RiskReward, ""))
            .unwrap();
        assert!(!without_ratio.has_target());
    }

    #[test]
    fn validation_error_is_surfaced() {
        let form = CalculatorForm::default().with(FieldKey::RiskPercent, "150");
        let err = Calculator::new().calculate(&form).unwrap_err();

        assert_eq!(err, CalculatorError::Validation(ValidationError::RiskPercent));
        assert_eq!(err.to_string(), "Risk % must be between 0 and 100");
    }

    #[test]
    fn uncomputable_message() {
        assert_eq!(
            CalculatorError::Uncomputable.to_string(),
            "Unable to calculate risk/reward with the provided inputs"
        );
    }

    #[test]
    fn render_formats_result() {
        let view = Calculator::new()
            .render(&CalculatorForm::default().with(FieldKey::RiskReward, ""))
            .unwrap();
        assert_eq!(view.quantity, "400");
        assert_eq!(view.value("Take Profit"), Some(sizing::PLACEHOLDER));
    }
}
