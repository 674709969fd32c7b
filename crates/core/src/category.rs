//! WHO-style classification bands.

use std::fmt;

use serde::{Serialize, Serializer};

/// A WHO-style BMI classification band.
///
/// Bands are half-open intervals that include their lower bound:
///
/// | BMI           | Category          |
/// |---------------|-------------------|
/// | < 18.5        | Underweight       |
/// | [18.5, 25.0)  | Normal / Healthy  |
/// | [25.0, 30.0)  | Overweight        |
/// | [30.0, 35.0)  | Obesity class I   |
/// | [35.0, 40.0)  | Obesity class II  |
/// | ≥ 40.0        | Obesity class III |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    ObesityClassI,
    ObesityClassII,
    ObesityClassIII,
}

impl Category {
    /// Every band in ascending BMI order.
    pub const ALL: [Category; 6] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::ObesityClassI,
        Self::ObesityClassII,
        Self::ObesityClassIII,
    ];

    /// Classifies an unrounded BMI value.
    ///
    /// ```
    /// use bmi_core::Category;
    ///
    /// assert_eq!(Category::from_bmi(18.5), Category::Normal);
    /// assert_eq!(Category::from_bmi(24.999), Category::Normal);
    /// assert_eq!(Category::from_bmi(25.0), Category::Overweight);
    /// ```
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else if bmi < 35.0 {
            Self::ObesityClassI
        } else if bmi < 40.0 {
            Self::ObesityClassII
        } else {
            Self::ObesityClassIII
        }
    }

    /// Returns the inclusive lower bound of the band, if it has one.
    #[must_use]
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            Self::Underweight => None,
            Self::Normal => Some(18.5),
            Self::Overweight => Some(25.0),
            Self::ObesityClassI => Some(30.0),
            Self::ObesityClassII => Some(35.0),
            Self::ObesityClassIII => Some(40.0),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal / Healthy",
            Self::Overweight => "Overweight",
            Self::ObesityClassI => "Obesity class I",
            Self::ObesityClassII => "Obesity class II",
            Self::ObesityClassIII => "Obesity class III",
        }
    }

    /// Returns the band's range as shown next to its label.
    #[must_use]
    pub fn range(self) -> &'static str {
        match self {
            Self::Underweight => "< 18.5",
            Self::Normal => "18.5–24.9",
            Self::Overweight => "25.0–29.9",
            Self::ObesityClassI => "30.0–34.9",
            Self::ObesityClassII => "35.0–39.9",
            Self::ObesityClassIII => "≥ 40.0",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.range())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
