//! Which form fields apply to a unit system.

use serde::Serialize;

use crate::UnitSystem;

/// Which height fields a form should show for a unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldVisibility {
    /// Show the centimeter field.
    pub show_metric_height: bool,
    /// Show the feet and inches fields.
    pub show_imperial_height: bool,
}

/// Returns the height fields relevant to `units`.
///
/// Weight is always shown.
#[must_use]
pub fn visibility_for(units: UnitSystem) -> FieldVisibility {
    let metric = units == UnitSystem::Metric;
    FieldVisibility {
        show_metric_height: metric,
        show_imperial_height: !metric,
    }
}
