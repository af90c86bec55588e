//! Per-city solar radiation intensities and electricity tariffs.
//!
//! This is fixed reference data: total over [`City`], resolved at compile
//! time, never mutated while the process runs.

use crate::{City, Orientation};

/// Daily-average solar radiation intensity on each exposure of a building,
/// in BTU per square meter per sunlit hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarRadiation {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    pub roof: f64,
}

impl SolarRadiation {
    /// Intensity on the facade with the given orientation.
    #[must_use]
    pub const fn facade(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::North => self.north,
            Orientation::South => self.south,
            Orientation::East => self.east,
            Orientation::West => self.west,
        }
    }
}

impl City {
    /// Solar radiation intensities for this city.
    #[must_use]
    pub const fn solar_radiation(self) -> SolarRadiation {
        match self {
            City::Bangalore => SolarRadiation {
                north: 150.0,
                south: 250.0,
                east: 200.0,
                west: 200.0,
                roof: 300.0,
            },
            City::Mumbai => SolarRadiation {
                north: 180.0,
                south: 350.0,
                east: 280.0,
                west: 270.0,
                roof: 400.0,
            },
            City::Kolkata => SolarRadiation {
                north: 200.0,
                south: 400.0,
                east: 300.0,
                west: 290.0,
                roof: 450.0,
            },
            City::Delhi => SolarRadiation {
                north: 160.0,
                south: 270.0,
                east: 220.0,
                west: 220.0,
                roof: 320.0,
            },
        }
    }

    /// Electricity tariff in rupees per kilowatt-hour.
    #[must_use]
    pub const fn tariff(self) -> f64 {
        match self {
            City::Bangalore => 6.5,
            City::Mumbai => 9.0,
            City::Kolkata => 7.5,
            City::Delhi => 8.5,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn facade_lookup_matches_the_named_fields() {
        let radiation = City::Delhi.solar_radiation();

        assert_eq!(radiation.facade(Orientation::North), 160.0);
        assert_eq!(radiation.facade(Orientation::South), 270.0);
        assert_eq!(radiation.facade(Orientation::East), 220.0);
        assert_eq!(radiation.facade(Orientation::West), 220.0);
        assert_eq!(radiation.roof, 320.0);
    }

    #[test]
    fn every_city_has_positive_intensities_and_a_tariff() {
        for city in City::ALL {
            let radiation = city.solar_radiation();
            for orientation in Orientation::ALL {
                assert!(radiation.facade(orientation) > 0.0);
            }
            assert!(radiation.roof > 0.0);
            assert!(city.tariff() > 0.0);
        }
    }

    #[test]
    fn tariffs_match_the_published_rates() {
        assert_eq!(City::Bangalore.tariff(), 6.5);
        assert_eq!(City::Mumbai.tariff(), 9.0);
        assert_eq!(City::Kolkata.tariff(), 7.5);
        assert_eq!(City::Delhi.tariff(), 8.5);
    }
}
