use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A city in the supported analysis set.
///
/// The set is closed: solar radiation intensities and electricity tariffs
/// exist only for these four cities, so any other name fails at parse time
/// with an [`UnsupportedCity`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Bangalore,
    Mumbai,
    Kolkata,
    Delhi,
}

impl City {
    /// Every supported city, in ranking iteration order.
    pub const ALL: [City; 4] = [City::Bangalore, City::Mumbai, City::Kolkata, City::Delhi];

    /// The city's name as it appears on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            City::Bangalore => "Bangalore",
            City::Mumbai => "Mumbai",
            City::Kolkata => "Kolkata",
            City::Delhi => "Delhi",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = UnsupportedCity;

    /// Parses an exact-match city name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bangalore" => Ok(City::Bangalore),
            "Mumbai" => Ok(City::Mumbai),
            "Kolkata" => Ok(City::Kolkata),
            "Delhi" => Ok(City::Delhi),
            other => Err(UnsupportedCity(other.to_owned())),
        }
    }
}

/// Error for a city name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported city `{0}`")]
pub struct UnsupportedCity(pub String);
