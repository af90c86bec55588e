/// A deterministic computation from an input to an output.
///
/// Components are pure: calling one twice with the same input yields the
/// same output, with no hidden state, randomness, or I/O. The analysis
/// layer relies on this when it fans a single design out across cities.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use solgain_core::Component;
///
/// struct Doubler;
///
/// impl Component for Doubler {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
///         Ok(input * 2.0)
///     }
/// }
///
/// assert_eq!(Doubler.call(3.0), Ok(6.0));
/// ```
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to decide
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
