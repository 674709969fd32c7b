//! Raw form input and its validation into a [`Measurement`].

use serde::{Deserialize, Serialize};

use crate::{
    Field, ValidationError,
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
    units::{Measurement, UnitSystem},
};

/// A single value as supplied by a form: a number, numeric text, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawValue {
    /// Parses the value as a finite number.
    ///
    /// Text is trimmed before parsing.
    /// Returns `None` for missing values, unparsable text, NaN and infinities.
    #[must_use]
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Missing => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Unvalidated BMI input, one field per form widget.
///
/// Only the height fields relevant to `units` are inspected.
/// Validation runs in a fixed order and stops at the first failure:
///
/// 1. `weight` must be a number, then strictly positive.
/// 2. Metric: `height_cm` must be a number, then strictly positive.
/// 3. Imperial: `height_ft` and `height_in` must both be numbers, then both
///    non-negative, then `height_ft * 12 + height_in` must be a finite,
///    strictly positive number.
/// 4. The resulting BMI must be finite, else the weight is reported as
///    not a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    pub units: UnitSystem,
    pub weight: RawValue,
    pub height_cm: RawValue,
    pub height_ft: RawValue,
    pub height_in: RawValue,
}

impl RawInput {
    /// Creates raw input from every form field.
    pub fn new(
        units: UnitSystem,
        weight: impl Into<RawValue>,
        height_cm: impl Into<RawValue>,
        height_ft: impl Into<RawValue>,
        height_in: impl Into<RawValue>,
    ) -> Self {
        Self {
            units,
            weight: weight.into(),
            height_cm: height_cm.into(),
            height_ft: height_ft.into(),
            height_in: height_in.into(),
        }
    }

    /// Creates metric input from a weight in kilograms and a height in centimeters.
    pub fn metric(weight: impl Into<RawValue>, height_cm: impl Into<RawValue>) -> Self {
        Self {
            units: UnitSystem::Metric,
            weight: weight.into(),
            height_cm: height_cm.into(),
            ..Self::default()
        }
    }

    /// Creates imperial input from a weight in pounds and a feet/inches height.
    pub fn imperial(
        weight: impl Into<RawValue>,
        height_ft: impl Into<RawValue>,
        height_in: impl Into<RawValue>,
    ) -> Self {
        Self {
            units: UnitSystem::Imperial,
            weight: weight.into(),
            height_ft: height_ft.into(),
            height_in: height_in.into(),
            ..Self::default()
        }
    }
}

impl TryFrom<&RawInput> for Measurement {
    type Error = ValidationError;

    fn try_from(input: &RawInput) -> Result<Self, Self::Error> {
        let weight = number(&input.weight, Field::Weight)?;
        let weight = strictly_positive(weight, Field::Weight)?;

        match input.units {
            UnitSystem::Metric => {
                let height_cm = number(&input.height_cm, Field::HeightCm)?;
                let height_cm = strictly_positive(height_cm, Field::HeightCm)?;
                Measurement::metric(weight, height_cm)
            }
            UnitSystem::Imperial => {
                let (Some(feet), Some(inches)) = (input.height_ft.parse(), input.height_in.parse())
                else {
                    return Err(ValidationError::NotANumber(Field::HeightFtIn));
                };
                let feet = non_negative(feet, Field::HeightFtIn)?;
                let inches = non_negative(inches, Field::HeightFtIn)?;
                Measurement::imperial(weight, feet, inches)
            }
        }
    }
}

impl TryFrom<RawInput> for Measurement {
    type Error = ValidationError;

    fn try_from(input: RawInput) -> Result<Self, Self::Error> {
        Self::try_from(&input)
    }
}

fn number(value: &RawValue, field: Field) -> Result<f64, ValidationError> {
    value.parse().ok_or(ValidationError::NotANumber(field))
}

fn strictly_positive(
    value: f64,
    field: Field,
) -> Result<Constrained<f64, StrictlyPositive>, ValidationError> {
    StrictlyPositive::new(value).map_err(|err| match err {
        ConstraintError::NotANumber => ValidationError::NotANumber(field),
        ConstraintError::Negative | ConstraintError::Zero => ValidationError::NonPositive(field),
    })
}

fn non_negative(value: f64, field: Field) -> Result<Constrained<f64, NonNegative>, ValidationError> {
    NonNegative::new(value).map_err(|err| match err {
        ConstraintError::NotANumber => ValidationError::NotANumber(field),
        ConstraintError::Negative | ConstraintError::Zero => ValidationError::Negative(field),
    })
}
