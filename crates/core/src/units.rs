//! Unit systems and validated measurements.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Length, Mass},
    length::{centimeter, foot, inch},
    mass::{kilogram, pound},
};

use crate::{
    Field, ValidationError,
    constraint::{Constrained, NonNegative, StrictlyPositive},
};

/// The unit system used for weight and height input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters.
    #[default]
    Metric,
    /// Pounds, feet and inches.
    Imperial,
}

impl UnitSystem {
    /// Returns the label a form shows for this unit system.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Metric => "Metric (kg, cm)",
            Self::Imperial => "Imperial (lb, ft, in)",
        }
    }

    /// Returns the abbreviation of the weight unit.
    #[must_use]
    pub fn weight_unit(self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lb",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known unit system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit system `{0}`, expected `metric` or `imperial`")]
pub struct ParseUnitSystemError(pub String);

impl FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    /// Accepts `metric`/`imperial` in any case, or the full form labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("metric") || trimmed == Self::Metric.label() {
            Ok(Self::Metric)
        } else if trimmed.eq_ignore_ascii_case("imperial") || trimmed == Self::Imperial.label() {
            Ok(Self::Imperial)
        } else {
            Err(ParseUnitSystemError(s.to_owned()))
        }
    }
}

/// Inches in one foot.
const INCHES_PER_FOOT: f64 = 12.0;

/// A validated height in one of two representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    /// A single centimeter value.
    Centimeters(Constrained<f64, StrictlyPositive>),
    /// A feet and inches pair whose total is strictly positive.
    FeetInches {
        feet: Constrained<f64, NonNegative>,
        inches: Constrained<f64, NonNegative>,
    },
}

impl Height {
    /// Returns `feet * 12 + inches` for the imperial representation.
    ///
    /// Returns `None` for a metric height.
    #[must_use]
    pub fn total_inches(&self) -> Option<f64> {
        match self {
            Self::Centimeters(_) => None,
            Self::FeetInches { feet, inches } => Some(inches_total(feet, inches)),
        }
    }

    /// Returns the height as a unit-safe length.
    #[must_use]
    pub fn length(&self) -> Length {
        match self {
            Self::Centimeters(cm) => Length::new::<centimeter>(*cm.as_ref()),
            Self::FeetInches { feet, inches } => {
                Length::new::<foot>(*feet.as_ref()) + Length::new::<inch>(*inches.as_ref())
            }
        }
    }
}

/// A validated weight and height pair.
///
/// Weight is kilograms for [`UnitSystem::Metric`] and pounds for
/// [`UnitSystem::Imperial`].
/// Every value is finite and so is the BMI they produce.
/// Construct one from raw form input with [`Measurement::try_from`], which
/// enforces the validation order described on [`crate::input::RawInput`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    weight: Constrained<f64, StrictlyPositive>,
    height: Height,
}

impl Measurement {
    /// Creates a metric measurement from kilograms and centimeters.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NotANumber`] for an infinite weight or height.
    /// - [`ValidationError::NotANumber`] naming the weight if the BMI
    ///   overflows.
    pub fn metric(
        weight_kg: Constrained<f64, StrictlyPositive>,
        height_cm: Constrained<f64, StrictlyPositive>,
    ) -> Result<Self, ValidationError> {
        finite(*weight_kg.as_ref(), Field::Weight)?;
        finite(*height_cm.as_ref(), Field::HeightCm)?;
        Self {
            weight: weight_kg,
            height: Height::Centimeters(height_cm),
        }
        .with_finite_bmi()
    }

    /// Creates an imperial measurement from pounds, feet and inches.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NotANumber`] for an infinite weight, feet or
    ///   inches, or if the total in inches overflows.
    /// - [`ValidationError::NonPositive`] if feet and inches are both zero.
    /// - [`ValidationError::NotANumber`] naming the weight if the BMI
    ///   overflows.
    pub fn imperial(
        weight_lb: Constrained<f64, StrictlyPositive>,
        feet: Constrained<f64, NonNegative>,
        inches: Constrained<f64, NonNegative>,
    ) -> Result<Self, ValidationError> {
        finite(*weight_lb.as_ref(), Field::Weight)?;
        finite(*feet.as_ref(), Field::HeightFtIn)?;
        finite(*inches.as_ref(), Field::HeightFtIn)?;

        let total = inches_total(&feet, &inches);
        finite(total, Field::HeightTotalIn)?;
        if total <= 0.0 {
            return Err(ValidationError::NonPositive(Field::HeightTotalIn));
        }

        Self {
            weight: weight_lb,
            height: Height::FeetInches { feet, inches },
        }
        .with_finite_bmi()
    }

    fn with_finite_bmi(self) -> Result<Self, ValidationError> {
        if self.bmi().is_finite() {
            Ok(self)
        } else {
            Err(ValidationError::NotANumber(Field::Weight))
        }
    }

    /// Returns the unit system implied by the height representation.
    #[must_use]
    pub fn units(&self) -> UnitSystem {
        match self.height {
            Height::Centimeters(_) => UnitSystem::Metric,
            Height::FeetInches { .. } => UnitSystem::Imperial,
        }
    }

    /// Returns the weight in the unit system's own unit (kg or lb).
    #[must_use]
    pub fn weight(&self) -> f64 {
        *self.weight.as_ref()
    }

    /// Returns the validated height.
    #[must_use]
    pub fn height(&self) -> &Height {
        &self.height
    }

    /// Returns the weight as a unit-safe mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        match self.units() {
            UnitSystem::Metric => Mass::new::<kilogram>(self.weight()),
            UnitSystem::Imperial => Mass::new::<pound>(self.weight()),
        }
    }

    /// Returns the height as a unit-safe length.
    #[must_use]
    pub fn height_length(&self) -> Length {
        self.height.length()
    }
}

/// Resolves an imperial height to total inches.
pub(crate) fn inches_total(
    feet: &Constrained<f64, NonNegative>,
    inches: &Constrained<f64, NonNegative>,
) -> f64 {
    feet.as_ref() * INCHES_PER_FOOT + inches.as_ref()
}

fn finite(value: f64, field: Field) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotANumber(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, mass::kilogram};

    #[test]
    fn unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!(" Imperial ".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!("Metric (kg, cm)".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!(
            "Imperial (lb, ft, in)".parse::<UnitSystem>(),
            Ok(UnitSystem::Imperial)
        );
        assert_eq!(
            "stone".parse::<UnitSystem>(),
            Err(ParseUnitSystemError("stone".into()))
        );
    }

    #[test]
    fn default_is_metric() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
        assert_eq!(UnitSystem::Imperial.weight_unit(), "lb");
    }

    #[test]
    fn imperial_height_totals() {
        let measurement = Measurement::imperial(
            StrictlyPositive::new(180.0).unwrap(),
            NonNegative::new(5.0).unwrap(),
            NonNegative::new(7.0).unwrap(),
        )
        .unwrap();

        assert_eq!(measurement.units(), UnitSystem::Imperial);
        assert_eq!(measurement.height().total_inches(), Some(67.0));
        assert_relative_eq!(
            measurement.height_length().get::<meter>(),
            1.7018,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            measurement.mass().get::<kilogram>(),
            81.646_626_6,
            epsilon = 1e-6
        );
    }

    #[test]
    fn zero_imperial_height_is_rejected() {
        let zero = NonNegative::new(0.0).unwrap();
        let weight = StrictlyPositive::new(150.0).unwrap();
        assert_eq!(
            Measurement::imperial(weight, zero, zero),
            Err(ValidationError::NonPositive(Field::HeightTotalIn))
        );
    }

    #[test]
    fn infinite_values_are_rejected() {
        let inf = f64::INFINITY;
        assert_eq!(
            Measurement::metric(
                StrictlyPositive::new(inf).unwrap(),
                StrictlyPositive::new(170.0).unwrap(),
            ),
            Err(ValidationError::NotANumber(Field::Weight))
        );
        assert_eq!(
            Measurement::metric(
                StrictlyPositive::new(70.0).unwrap(),
                StrictlyPositive::new(inf).unwrap(),
            ),
            Err(ValidationError::NotANumber(Field::HeightCm))
        );
        assert_eq!(
            Measurement::imperial(
                StrictlyPositive::new(150.0).unwrap(),
                NonNegative::new(inf).unwrap(),
                NonNegative::new(0.0).unwrap(),
            ),
            Err(ValidationError::NotANumber(Field::HeightFtIn))
        );
    }

    #[test]
    fn overflowing_values_are_rejected() {
        // Finite feet whose total in inches overflows.
        assert_eq!(
            Measurement::imperial(
                StrictlyPositive::new(150.0).unwrap(),
                NonNegative::new(1e308).unwrap(),
                NonNegative::new(0.0).unwrap(),
            ),
            Err(ValidationError::NotANumber(Field::HeightTotalIn))
        );

        // Finite inputs whose BMI overflows.
        assert_eq!(
            Measurement::metric(
                StrictlyPositive::new(1e308).unwrap(),
                StrictlyPositive::new(1.0).unwrap(),
            ),
            Err(ValidationError::NotANumber(Field::Weight))
        );
    }

    #[test]
    fn metric_measurement() {
        let measurement = Measurement::metric(
            StrictlyPositive::new(70.0).unwrap(),
            StrictlyPositive::new(170.0).unwrap(),
        )
        .unwrap();

        assert_eq!(measurement.units(), UnitSystem::Metric);
        assert_eq!(measurement.height().total_inches(), None);
        assert_relative_eq!(
            measurement.height_length().get::<meter>(),
            1.7,
            epsilon = 1e-12
        );
        assert_relative_eq!(measurement.mass().get::<kilogram>(), 70.0);
    }
}
