//! Unit-aware Body Mass Index computation.
//!
//! This crate turns raw weight and height input into a classified BMI:
//!
//! - [`RawInput`] — form-style input where each field may be a number,
//!   numeric text, or missing
//! - [`Measurement`] — validated input with its invariants in its types
//! - [`compute_bmi`] — validation, the metric or imperial formula, and
//!   classification into one of six [`Category`] bands
//! - [`Explanation`] — the result, which renders as markdown
//! - [`visibility_for`] — which height fields a form should show
//!
//! Every operation is pure and may be called concurrently.

pub mod constraint;
pub mod input;
pub mod units;

mod category;
mod engine;
mod error;
mod explanation;
mod model;
mod visibility;

pub use category::Category;
pub use engine::{BmiModel, compute, compute_bmi, compute_bmi_text};
pub use error::{Field, ValidationError};
pub use explanation::{ADVISORY_NOTE, CalculationTrace, Explanation, render};
pub use input::{RawInput, RawValue};
pub use model::Model;
pub use units::{Height, Measurement, ParseUnitSystemError, UnitSystem};
pub use visibility::{FieldVisibility, visibility_for};
