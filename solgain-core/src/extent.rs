use std::ops::Mul;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A strictly positive, finite extent in meters.
///
/// Facade and skylight widths and heights are `Extent`s, so a design that
/// deserializes successfully can never carry a zero, negative, or
/// non-finite dimension into the estimator.
///
/// # Examples
///
/// ```
/// use solgain_core::Extent;
///
/// let width = Extent::new(2.0).unwrap();
/// let height = Extent::new(1.5).unwrap();
/// assert_eq!(width * height, 3.0);
///
/// assert!(Extent::new(0.0).is_err());
/// assert!(Extent::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Extent(f64);

impl Extent {
    /// Creates an `Extent` if `value` is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ExtentError::NotFinite`] if `value` is `NaN` or infinite,
    /// or [`ExtentError::NotPositive`] if it is zero or negative.
    pub fn new(value: f64) -> Result<Self, ExtentError> {
        if !value.is_finite() {
            return Err(ExtentError::NotFinite(value));
        }
        if value <= 0.0 {
            return Err(ExtentError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Extent {
    type Error = ExtentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Extent::new(value)
    }
}

impl From<Extent> for f64 {
    fn from(extent: Extent) -> Self {
        extent.0
    }
}

impl Mul for Extent {
    type Output = f64;

    fn mul(self, rhs: Extent) -> Self::Output {
        self.0 * rhs.0
    }
}

/// Errors that can occur when constructing an [`Extent`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ExtentError {
    /// Input was not finite.
    #[error("extent is not finite: {0}")]
    NotFinite(f64),

    /// Input was zero or negative.
    #[error("extent must be strictly positive, got {0}")]
    NotPositive(f64),
}
