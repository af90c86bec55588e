//! Solar heat gain and cooling cost analysis for building facade designs.
//!
//! The crate is organized around a small pure core:
//!
//! - [`BuildingDesign`] describes a rectangular building's facade geometry
//!   and glazing properties.
//! - [`City`] is the closed set of supported cities; its solar radiation
//!   intensities and electricity tariff form an immutable constants table.
//! - [`HeatGainEstimator`] is a deterministic [`Component`] mapping a
//!   design and a city to daily heat gain and cooling cost figures.
//! - [`AnalysisService`] orchestrates the estimator over designs fetched
//!   from a [`DesignSource`], for single analysis, side-by-side comparison,
//!   and city-wise ranking.

mod analysis;
mod city;
mod climate;
mod component;
mod design;
mod estimator;
mod extent;
mod orientation;
mod ratio;

pub use analysis::{
    AnalysisError, AnalysisService, AnalyzedDesign, CityRankings, DesignSource, RankingEntry,
};
pub use city::{City, UnsupportedCity};
pub use climate::SolarRadiation;
pub use component::Component;
pub use design::{BuildingDesign, DesignError, DesignId, DesignSpec, FacadeDims, SkylightDims};
pub use estimator::{
    EstimateError, EstimateInput, HeatGainAnalysis, HeatGainEstimator, BTU_PER_KWH, COOLING_COP,
    SUN_HOURS_PER_DAY,
};
pub use extent::{Extent, ExtentError};
pub use orientation::{Compass, Orientation};
pub use ratio::{Ratio, RatioError};
