use std::ops::Mul;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A bounded scalar in `[0.0, 1.0]`.
///
/// Used for window-to-wall ratios and the solar heat gain coefficient,
/// both of which are fractions of a whole. The wrapped value is checked at
/// construction, so any `Ratio` obtained through [`new`](Ratio::new) or
/// deserialization is finite and in range.
///
/// # Examples
///
/// ```
/// use solgain_core::Ratio;
///
/// let wwr = Ratio::new(0.4).unwrap();
/// assert_eq!(wwr.get(), 0.4);
///
/// // Multiply a scalar by a ratio (either order).
/// assert_eq!(wwr * 3.0, 1.2);
/// assert_eq!(3.0 * wwr, 1.2);
///
/// assert!(Ratio::new(1.5).is_err());
/// assert!(Ratio::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Ratio(f64);

impl Ratio {
    /// A ratio of zero.
    pub const ZERO: Ratio = Ratio(0.0);

    /// Creates a `Ratio` if `value` is finite and within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::NotFinite`] if `value` is `NaN` or infinite,
    /// or [`RatioError::OutOfRange`] if it lies outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, RatioError> {
        if !value.is_finite() {
            return Err(RatioError::NotFinite(value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(RatioError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Ratio {
    type Error = RatioError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Ratio::new(value)
    }
}

impl From<Ratio> for f64 {
    fn from(ratio: Ratio) -> Self {
        ratio.0
    }
}

impl Mul<f64> for Ratio {
    type Output = f64;

    fn mul(self, rhs: f64) -> Self::Output {
        self.0 * rhs
    }
}

impl Mul<Ratio> for f64 {
    type Output = f64;

    fn mul(self, rhs: Ratio) -> Self::Output {
        self * rhs.0
    }
}

/// Errors that can occur when constructing a [`Ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RatioError {
    /// Input was not finite.
    #[error("ratio is not finite: {0}")]
    NotFinite(f64),

    /// Input was outside the allowed range.
    #[error("ratio {0} is outside the range [0, 1]")]
    OutOfRange(f64),
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_closed_unit_interval() {
        assert_eq!(Ratio::new(0.0).unwrap().get(), 0.0);
        assert_eq!(Ratio::new(0.5).unwrap().get(), 0.5);
        assert_eq!(Ratio::new(1.0).unwrap().get(), 1.0);
    }

    #[test]
    fn rejects_out_of_range_and_non_finite_values() {
        assert!(matches!(Ratio::new(-0.01), Err(RatioError::OutOfRange(_))));
        assert!(matches!(Ratio::new(1.01), Err(RatioError::OutOfRange(_))));
        assert!(matches!(
            Ratio::new(f64::NAN),
            Err(RatioError::NotFinite(_))
        ));
        assert!(matches!(
            Ratio::new(f64::INFINITY),
            Err(RatioError::NotFinite(_))
        ));
    }

    #[test]
    fn multiplies_scalars_from_either_side() {
        let ratio = Ratio::new(0.25).unwrap();
        assert_eq!(ratio * 200.0, 50.0);
        assert_eq!(200.0 * ratio, 50.0);
    }

    #[test]
    fn serde_enforces_the_bounds() {
        let ratio: Ratio = serde_json::from_str("0.4").unwrap();
        assert_eq!(ratio.get(), 0.4);
        assert_eq!(serde_json::to_string(&ratio).unwrap(), "0.4");

        assert!(serde_json::from_str::<Ratio>("1.5").is_err());
        assert!(serde_json::from_str::<Ratio>("-0.1").is_err());
    }
}
