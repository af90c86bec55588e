use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::{
    BuildingDesign, City, Component, DesignId, EstimateError, EstimateInput, HeatGainAnalysis,
    HeatGainEstimator, UnsupportedCity,
};

/// Read access to stored designs, as the analysis layer sees it.
pub trait DesignSource {
    /// Fetches one design, if present.
    fn get(&self, id: DesignId) -> Option<BuildingDesign>;

    /// Fetches every requested design that exists, in the store's natural
    /// order. Missing ids are skipped, so the result may be shorter than
    /// the request.
    fn get_many(&self, ids: &[DesignId]) -> Vec<BuildingDesign>;
}

impl<S: DesignSource + ?Sized> DesignSource for Arc<S> {
    fn get(&self, id: DesignId) -> Option<BuildingDesign> {
        (**self).get(id)
    }

    fn get_many(&self, ids: &[DesignId]) -> Vec<BuildingDesign> {
        (**self).get_many(ids)
    }
}

/// Errors from the analysis operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The requested design does not exist.
    #[error("building design `{0}` not found")]
    DesignNotFound(DesignId),

    /// At least one design in a comparison request does not exist.
    #[error("one or more designs not found")]
    DesignsNotFound,

    /// A comparison needs at least two designs.
    #[error("at least two designs are required for comparison")]
    NotEnoughDesigns,

    /// The requested city is outside the supported set.
    #[error(transparent)]
    UnsupportedCity(#[from] UnsupportedCity),

    /// The estimator failed for the requested design.
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// One analyzed design: the stored record plus its heat gain figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedDesign {
    pub design: BuildingDesign,
    pub analysis: HeatGainAnalysis,
}

/// One entry in a city ranking.
///
/// A city the estimator handled is `Ranked`; a city it failed for is
/// reported inline as `Failed` rather than aborting the whole ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RankingEntry {
    #[serde(rename_all = "camelCase")]
    Ranked {
        city: City,
        cooling_cost: f64,
        /// Energy consumed in kWh, the figure clients chart as efficiency.
        energy_efficiency: f64,
        rank: usize,
    },
    Failed {
        city: City,
        error: String,
    },
}

/// A design's cooling cost ranking across every supported city.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRankings {
    pub design: BuildingDesign,
    pub city_rankings: Vec<RankingEntry>,
}

/// Orchestrates the [`HeatGainEstimator`] over designs fetched from a
/// [`DesignSource`].
///
/// All operations are stateless reads: the service holds no mutable state
/// and every call is independent of every other.
#[derive(Debug, Clone)]
pub struct AnalysisService<S> {
    source: S,
    estimator: HeatGainEstimator,
}

impl<S: DesignSource> AnalysisService<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            estimator: HeatGainEstimator,
        }
    }

    /// Analyzes one design in one city.
    ///
    /// # Errors
    ///
    /// Fails if the id does not resolve, the city is unsupported, or the
    /// estimator rejects the design.
    pub fn analyze(&self, design_id: DesignId, city: &str) -> Result<AnalyzedDesign, AnalysisError> {
        let city: City = city.parse()?;
        let design = self
            .source
            .get(design_id)
            .ok_or(AnalysisError::DesignNotFound(design_id))?;

        let analysis = self.estimator.call(EstimateInput {
            design: design.clone(),
            city,
        })?;

        Ok(AnalyzedDesign { design, analysis })
    }

    /// Analyzes several designs in one city for side-by-side comparison.
    ///
    /// Resolution is all-or-nothing: if fewer designs resolve than were
    /// requested, the whole comparison fails rather than returning a
    /// partial result. Results follow the store's natural fetch order, not
    /// the order ids were requested in.
    ///
    /// # Errors
    ///
    /// Fails on fewer than two ids, an unsupported city, unresolved ids,
    /// or an estimator failure for any resolved design.
    pub fn compare(
        &self,
        city: &str,
        design_ids: &[DesignId],
    ) -> Result<Vec<AnalyzedDesign>, AnalysisError> {
        let city: City = city.parse()?;
        if design_ids.len() < 2 {
            return Err(AnalysisError::NotEnoughDesigns);
        }

        let designs = self.source.get_many(design_ids);
        if designs.len() != design_ids.len() {
            return Err(AnalysisError::DesignsNotFound);
        }

        designs
            .into_iter()
            .map(|design| {
                let analysis = self.estimator.call(EstimateInput {
                    design: design.clone(),
                    city,
                })?;
                Ok(AnalyzedDesign { design, analysis })
            })
            .collect()
    }

    /// Ranks every supported city for one design, cheapest cooling first.
    ///
    /// A per-city estimator failure becomes an inline [`RankingEntry::Failed`]
    /// and the remaining cities are still ranked: a failure here points at a
    /// degenerate design rather than a caller error, so the ranking degrades
    /// instead of aborting. Ranks run 1..N over the successful entries in
    /// ascending cooling cost order, ties keeping their iteration order;
    /// failed entries follow unranked.
    ///
    /// # Errors
    ///
    /// Fails only if the design id does not resolve.
    pub fn city_rankings(&self, design_id: DesignId) -> Result<CityRankings, AnalysisError> {
        let design = self
            .source
            .get(design_id)
            .ok_or(AnalysisError::DesignNotFound(design_id))?;

        let mut ranked = Vec::new();
        let mut failed = Vec::new();
        for city in City::ALL {
            match self.estimator.call(EstimateInput {
                design: design.clone(),
                city,
            }) {
                Ok(analysis) => ranked.push((city, analysis)),
                Err(err) => {
                    log::warn!("city ranking for {city} failed: {err}");
                    failed.push(RankingEntry::Failed {
                        city,
                        error: "Error calculating data".to_owned(),
                    });
                }
            }
        }

        // Stable sort: equal costs keep City::ALL iteration order.
        ranked.sort_by(|a, b| a.1.cooling_cost.total_cmp(&b.1.cooling_cost));

        let mut city_rankings: Vec<RankingEntry> = ranked
            .into_iter()
            .enumerate()
            .map(|(index, (city, analysis))| RankingEntry::Ranked {
                city,
                cooling_cost: analysis.cooling_cost,
                energy_efficiency: analysis.energy_consumed_kwh,
                rank: index + 1,
            })
            .collect();
        city_rankings.extend(failed);

        Ok(CityRankings {
            design,
            city_rankings,
        })
    }
}
