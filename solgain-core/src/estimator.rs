use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BuildingDesign, City, Component};

/// Hours of usable sunlight per day.
pub const SUN_HOURS_PER_DAY: f64 = 8.0;

/// BTU in one kilowatt-hour.
pub const BTU_PER_KWH: f64 = 3412.0;

/// Coefficient of performance of the cooling system.
pub const COOLING_COP: f64 = 4.0;

/// Input to the [`HeatGainEstimator`]: one design and the city to place it in.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateInput {
    pub design: BuildingDesign,
    pub city: City,
}

/// Daily heat gain and cooling cost figures for one design in one city.
///
/// Each field is rounded to two decimals for presentation; the computation
/// itself runs at full `f64` precision and rounds last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatGainAnalysis {
    /// Accumulated solar heat gain through the glazing, in BTU.
    pub total_heat_gain: f64,
    /// Heat gain converted to a cooling load, in kWh.
    #[serde(rename = "coolingLoadKWh")]
    pub cooling_load_kwh: f64,
    /// Electrical energy the cooling system draws to remove that load, in kWh.
    #[serde(rename = "energyConsumedKWh")]
    pub energy_consumed_kwh: f64,
    /// Cost of that energy at the city's tariff.
    pub cooling_cost: f64,
}

/// Errors from the [`HeatGainEstimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The accumulated heat gain overflowed to a non-finite value.
    ///
    /// Individually valid inputs can still overflow `f64` once multiplied.
    #[error("heat gain calculation produced a non-finite value")]
    NonFinite,
}

/// Estimates daily solar heat gain and cooling cost for a building design.
///
/// For each facade orientation the glazed area (wall area × WWR) admits
/// radiation scaled by the SHGC, the city's per-orientation intensity, and
/// [`SUN_HOURS_PER_DAY`]; a skylight, when present, contributes the same
/// way against the roof intensity. The accumulated gain is converted to a
/// cooling load ([`BTU_PER_KWH`]), derated by the system's
/// [`COOLING_COP`], and priced at the city tariff.
///
/// The estimator is a pure function: identical input always yields an
/// identical result.
///
/// # Example
///
/// ```
/// use solgain_core::{
///     BuildingDesign, City, Compass, Component, DesignId, Extent, FacadeDims,
///     HeatGainEstimator, EstimateInput, Ratio,
/// };
///
/// let facade = FacadeDims {
///     width: Extent::new(2.0).unwrap(),
///     height: Extent::new(1.5).unwrap(),
/// };
/// let design = BuildingDesign {
///     id: DesignId::new(),
///     name: "Glass box".into(),
///     dimensions: Compass::uniform(facade),
///     wwr: Compass::uniform(Ratio::new(0.4).unwrap()),
///     shgc: Ratio::new(0.5).unwrap(),
///     skylight: None,
///     created_at: jiff::Timestamp::UNIX_EPOCH,
///     updated_at: jiff::Timestamp::UNIX_EPOCH,
/// };
///
/// let analysis = HeatGainEstimator
///     .call(EstimateInput { design, city: City::Delhi })
///     .unwrap();
/// assert_eq!(analysis.total_heat_gain, 4176.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeatGainEstimator;

impl Component for HeatGainEstimator {
    type Input = EstimateInput;
    type Output = HeatGainAnalysis;
    type Error = EstimateError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let EstimateInput { design, city } = input;
        let radiation = city.solar_radiation();

        let mut total_heat_gain = 0.0;
        for (orientation, dims) in design.dimensions.iter() {
            let glazed_area = dims.area() * *design.wwr.get(orientation);
            total_heat_gain +=
                glazed_area * design.shgc * radiation.facade(orientation) * SUN_HOURS_PER_DAY;
        }

        if let Some(skylight) = design.skylight {
            total_heat_gain += skylight.area() * design.shgc * radiation.roof * SUN_HOURS_PER_DAY;
        }

        if !total_heat_gain.is_finite() {
            return Err(EstimateError::NonFinite);
        }

        let cooling_load_kwh = total_heat_gain / BTU_PER_KWH;
        let energy_consumed_kwh = cooling_load_kwh / COOLING_COP;
        let cooling_cost = energy_consumed_kwh * city.tariff();

        Ok(HeatGainAnalysis {
            total_heat_gain: round2(total_heat_gain),
            cooling_load_kwh: round2(cooling_load_kwh),
            energy_consumed_kwh: round2(energy_consumed_kwh),
            cooling_cost: round2(cooling_cost),
        })
    }
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
