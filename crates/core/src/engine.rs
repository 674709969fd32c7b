//! BMI formulas and the validate-then-compute entry points.

use crate::{
    Model, ValidationError,
    explanation::{CalculationTrace, Explanation, render},
    input::RawInput,
    units::{Height, Measurement, inches_total},
};

/// The lb/in² to kg/m² conversion factor, rounded to the conventional 703.
const IMPERIAL_FACTOR: f64 = 703.0;

impl Measurement {
    /// Returns the BMI at full precision.
    ///
    /// - Metric: `weight / (cm / 100)²`
    /// - Imperial: `703 × weight / (ft × 12 + in)²`
    #[must_use]
    pub fn bmi(&self) -> f64 {
        self.trace().bmi()
    }

    fn trace(&self) -> CalculationTrace {
        let weight = self.weight();
        match self.height() {
            Height::Centimeters(cm) => {
                let height_m = cm.as_ref() / 100.0;
                CalculationTrace::Metric {
                    weight_kg: weight,
                    height_m,
                    bmi: weight / height_m.powi(2),
                }
            }
            Height::FeetInches { feet, inches } => {
                let total_inches = inches_total(feet, inches);
                CalculationTrace::Imperial {
                    weight_lb: weight,
                    total_inches,
                    bmi: IMPERIAL_FACTOR * weight / total_inches.powi(2),
                }
            }
        }
    }
}

/// Computes and classifies the BMI of a validated measurement.
#[must_use]
pub fn compute(measurement: &Measurement) -> Explanation {
    let trace = measurement.trace();
    Explanation::new(trace.bmi(), trace)
}

/// Validates raw input, then computes and classifies its BMI.
///
/// Validation stops at the first failing field and no partial result is
/// produced.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first field that failed.
///
/// # Example
///
/// ```
/// use bmi_core::{Category, RawInput, compute_bmi};
///
/// let explanation = compute_bmi(&RawInput::imperial(180.0, 5.0, 7.0)).unwrap();
/// assert_eq!(explanation.rounded, 28.2);
/// assert_eq!(explanation.category, Category::Overweight);
/// ```
pub fn compute_bmi(input: &RawInput) -> Result<Explanation, ValidationError> {
    let measurement = Measurement::try_from(input)?;
    Ok(compute(&measurement))
}

/// Like [`compute_bmi`], but collapses either outcome into display text.
#[must_use]
pub fn compute_bmi_text(input: &RawInput) -> String {
    render(&compute_bmi(input))
}

/// The BMI engine as a [`Model`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BmiModel;

impl Model for BmiModel {
    type Input = RawInput;
    type Output = Explanation;
    type Error = ValidationError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        compute_bmi(&input)
    }
}
