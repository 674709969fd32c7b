//! Validation errors for raw BMI input.

use std::fmt;

use thiserror::Error;

/// An input field checked during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Weight in kilograms or pounds.
    Weight,
    /// Metric height in centimeters.
    HeightCm,
    /// The imperial feet and inches pair, checked together.
    HeightFtIn,
    /// The imperial height resolved to total inches, which must be finite
    /// and strictly positive.
    HeightTotalIn,
}

impl Field {
    /// Returns the stable key naming this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::HeightCm => "height_cm",
            Self::HeightFtIn => "height_ft_in",
            Self::HeightTotalIn => "height_total_in",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Self::Weight => "a valid number for weight",
            Self::HeightCm => "a valid number for height (cm)",
            Self::HeightFtIn => "valid numbers for height (feet and inches)",
            Self::HeightTotalIn => "a valid number for total height in inches",
        }
    }

    fn subject(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::HeightCm => "Height (cm)",
            Self::HeightFtIn => "Height values",
            Self::HeightTotalIn => "Total height in inches",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors produced while validating raw BMI input.
///
/// Validation stops at the first failing field, so each error names exactly
/// one field. All variants are recoverable by resubmitting corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is missing, unparsable, or not finite.
    #[error("Please enter {}.", .0.prompt())]
    NotANumber(Field),

    /// The field must be strictly greater than zero.
    #[error("{} must be greater than 0.", .0.subject())]
    NonPositive(Field),

    /// The field must be zero or greater.
    #[error("{} must be non-negative.", .0.subject())]
    Negative(Field),
}

impl ValidationError {
    /// Returns the field that failed validation.
    #[must_use]
    pub fn field(&self) -> Field {
        match *self {
            Self::NotANumber(field) | Self::NonPositive(field) | Self::Negative(field) => field,
        }
    }

    /// Returns a short name for the kind of failure.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotANumber(_) => "not_a_number",
            Self::NonPositive(_) => "non_positive",
            Self::Negative(_) => "negative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_field() {
        let cases = [
            (
                ValidationError::NotANumber(Field::Weight),
                "Please enter a valid number for weight.",
            ),
            (
                ValidationError::NonPositive(Field::Weight),
                "Weight must be greater than 0.",
            ),
            (
                ValidationError::NotANumber(Field::HeightCm),
                "Please enter a valid number for height (cm).",
            ),
            (
                ValidationError::NonPositive(Field::HeightCm),
                "Height (cm) must be greater than 0.",
            ),
            (
                ValidationError::NotANumber(Field::HeightFtIn),
                "Please enter valid numbers for height (feet and inches).",
            ),
            (
                ValidationError::Negative(Field::HeightFtIn),
                "Height values must be non-negative.",
            ),
            (
                ValidationError::NonPositive(Field::HeightTotalIn),
                "Total height in inches must be greater than 0.",
            ),
            (
                ValidationError::NotANumber(Field::HeightTotalIn),
                "Please enter a valid number for total height in inches.",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn field_and_kind_accessors() {
        let error = ValidationError::Negative(Field::HeightFtIn);
        assert_eq!(error.field(), Field::HeightFtIn);
        assert_eq!(error.field().key(), "height_ft_in");
        assert_eq!(error.kind(), "negative");
        assert_eq!(Field::HeightTotalIn.to_string(), "height_total_in");
    }
}
