//! The typed model seam the engine is exposed through.

/// A deterministic mapping from a typed input to a typed output.
///
/// Implementors must produce the same result for the same input and must not
/// touch shared state, so a model can be called from any number of threads
/// without coordination.
///
/// # Example
///
/// ```
/// use bmi_core::{BmiModel, Category, Model, RawInput};
///
/// let explanation = BmiModel.call(RawInput::metric(70.0, 170.0)).unwrap();
/// assert_eq!(explanation.category, Category::Normal);
/// ```
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
