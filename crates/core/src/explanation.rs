//! Computed results and their text rendering.

use std::fmt;

use serde::{Serialize, Serializer};
use uom::si::{areal_mass_density::kilogram_per_square_meter, f64::ArealMassDensity};

use crate::{Category, ValidationError, units::UnitSystem};

/// Caveat shown alongside every computed BMI.
pub const ADVISORY_NOTE: &str = "BMI is a simple screening tool; it does **not** directly \
measure body fat. It may misclassify very muscular people, pregnant people, or children. \
Consult a healthcare professional for personalized advice.";

/// The formula with the actual numbers substituted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationTrace {
    Metric {
        weight_kg: f64,
        height_m: f64,
        bmi: f64,
    },
    Imperial {
        weight_lb: f64,
        total_inches: f64,
        bmi: f64,
    },
}

impl CalculationTrace {
    #[must_use]
    pub fn units(&self) -> UnitSystem {
        match self {
            Self::Metric { .. } => UnitSystem::Metric,
            Self::Imperial { .. } => UnitSystem::Imperial,
        }
    }

    /// Returns the BMI the trace computes.
    #[must_use]
    pub fn bmi(&self) -> f64 {
        match *self {
            Self::Metric { bmi, .. } | Self::Imperial { bmi, .. } => bmi,
        }
    }
}

impl fmt::Display for CalculationTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Metric {
                weight_kg,
                height_m,
                bmi,
            } => write!(
                f,
                "{} kg ÷ ({height_m:.2} m)² = {bmi:.3}",
                Decimal(weight_kg)
            ),
            Self::Imperial {
                weight_lb,
                total_inches,
                bmi,
            } => write!(
                f,
                "703 × {} lb ÷ ({total_inches:.1} in)² = {bmi:.3}",
                Decimal(weight_lb)
            ),
        }
    }
}

/// A computed BMI with its classification and calculation trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// The unit system the input was given in.
    pub units: UnitSystem,
    /// The BMI at full precision.
    pub bmi: f64,
    /// The BMI rounded to one decimal place, ties to even.
    pub rounded: f64,
    /// The band of the unrounded BMI.
    pub category: Category,
    #[serde(serialize_with = "serialize_display")]
    pub trace: CalculationTrace,
    pub note: &'static str,
}

impl Explanation {
    pub(crate) fn new(bmi: f64, trace: CalculationTrace) -> Self {
        Self {
            units: trace.units(),
            bmi,
            rounded: round_to_tenth(bmi),
            category: Category::from_bmi(bmi),
            trace,
            note: ADVISORY_NOTE,
        }
    }

    /// Returns the BMI as an areal mass density in kg/m².
    #[must_use]
    pub fn bmi_density(&self) -> ArealMassDensity {
        ArealMassDensity::new::<kilogram_per_square_meter>(self.bmi)
    }
}

/// Renders the explanation as markdown.
impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**Your BMI:** **{}**\n\n\
             **Category:** {}\n\n\
             ⚠️ Notes: {}\n\n\
             **Calculation:** {}",
            Decimal(self.rounded),
            self.category,
            self.note,
            self.trace,
        )
    }
}

/// Renders either outcome as a single human-readable string.
///
/// Errors are prefixed with `❌` so a caller showing the text verbatim can
/// never mistake them for a result.
#[must_use]
pub fn render(result: &Result<Explanation, ValidationError>) -> String {
    match result {
        Ok(explanation) => explanation.to_string(),
        Err(err) => format!("❌ {err}"),
    }
}

/// Rounds to one decimal place from the exact binary value, ties to even.
///
/// `24.15` is stored as `24.1499…` and so rounds down.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Shortest round-trip form that always keeps a fractional digit (`70.0`).
///
/// Magnitudes from `1e16` up and below `1e-4` use exponent notation with a
/// signed, two-digit exponent (`1e+16`, `2.5e-05`).
struct Decimal(f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if !self.0.is_finite() {
            write!(f, "{}", self.0)
        } else if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            let scientific = format!("{:e}", self.0);
            let Some((mantissa, exponent)) = scientific.split_once('e') else {
                return f.write_str(&scientific);
            };
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        } else if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn serialize_display<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: fmt::Display,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(round_to_tenth(24.221_453), 24.2);
        assert_eq!(round_to_tenth(28.19), 28.2);
        assert_eq!(round_to_tenth(0.25), 0.2);
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(40.0), 40.0);
    }

    #[test]
    fn rounding_uses_the_stored_value() {
        // Both sit just below their decimal tie once stored as binary.
        assert_eq!(round_to_tenth(24.15), 24.1);
        assert_eq!(round_to_tenth(0.35), 0.3);
        assert_eq!(round_to_tenth(24.149_999_9), 24.1);
        assert_eq!(round_to_tenth(28.188_906), 28.2);
    }

    #[test]
    fn decimal_keeps_a_fractional_digit() {
        assert_eq!(Decimal(70.0).to_string(), "70.0");
        assert_eq!(Decimal(180.5).to_string(), "180.5");
        assert_eq!(Decimal(0.1).to_string(), "0.1");
        assert_eq!(Decimal(0.0001).to_string(), "0.0001");
        assert_eq!(Decimal(9_999_999_999_999_998.0).to_string(), "9999999999999998.0");
    }

    #[test]
    fn decimal_switches_to_exponent_form() {
        assert_eq!(Decimal(1e16).to_string(), "1e+16");
        assert_eq!(Decimal(1.5e16).to_string(), "1.5e+16");
        assert_eq!(Decimal(1e308).to_string(), "1e+308");
        assert_eq!(Decimal(2.5e-5).to_string(), "2.5e-05");
        assert_eq!(Decimal(1e-7).to_string(), "1e-07");
    }

    #[test]
    fn metric_trace_text() {
        let trace = CalculationTrace::Metric {
            weight_kg: 70.0,
            height_m: 1.7,
            bmi: 24.221_453_287_197_23,
        };
        assert_eq!(trace.to_string(), "70.0 kg ÷ (1.70 m)² = 24.221");
    }

    #[test]
    fn imperial_trace_text() {
        let trace = CalculationTrace::Imperial {
            weight_lb: 180.0,
            total_inches: 67.0,
            bmi: 28.188_906_215_192_69,
        };
        assert_eq!(trace.to_string(), "703 × 180.0 lb ÷ (67.0 in)² = 28.189");
    }

    #[test]
    fn markdown_rendering() {
        let trace = CalculationTrace::Metric {
            weight_kg: 70.0,
            height_m: 1.7,
            bmi: 24.221_453_287_197_23,
        };
        let explanation = Explanation::new(24.221_453_287_197_23, trace);
        let text = render(&Ok(explanation));

        assert!(text.starts_with("**Your BMI:** **24.2**\n\n"));
        assert!(text.contains("**Category:** Normal / Healthy (18.5–24.9)\n\n"));
        assert!(text.contains(ADVISORY_NOTE));
        assert!(text.ends_with("**Calculation:** 70.0 kg ÷ (1.70 m)² = 24.221"));
    }

    #[test]
    fn error_rendering() {
        let text = render(&Err(ValidationError::NotANumber(crate::Field::Weight)));
        assert_eq!(text, "❌ Please enter a valid number for weight.");
    }

    #[test]
    fn density_accessor() {
        let trace = CalculationTrace::Metric {
            weight_kg: 100.0,
            height_m: 2.0,
            bmi: 25.0,
        };
        let explanation = Explanation::new(25.0, trace);
        assert_relative_eq!(
            explanation
                .bmi_density()
                .get::<kilogram_per_square_meter>(),
            25.0
        );
    }
}
