use std::sync::Arc;

use serde::{Deserialize, Serialize};
use warp::{http::StatusCode, reply, Rejection, Reply};

use solgain_core::{AnalysisService, AnalyzedDesign, DesignId, DesignSpec};
use solgain_store::MemoryStore;

use crate::error::{reject_analysis, reject_design, reject_store, ApiError};

pub type Service = AnalysisService<Arc<MemoryStore>>;

pub async fn create_design(
    store: Arc<MemoryStore>,
    spec: DesignSpec,
) -> Result<impl Reply, Rejection> {
    spec.validate().map_err(reject_design)?;
    let design = store.create(spec);
    Ok(reply::with_status(
        reply::json(&design),
        StatusCode::CREATED,
    ))
}

pub async fn list_designs(store: Arc<MemoryStore>) -> Result<impl Reply, Rejection> {
    Ok(reply::json(&store.list()))
}

pub async fn get_design(id: DesignId, store: Arc<MemoryStore>) -> Result<impl Reply, Rejection> {
    let design = store.get(id).map_err(reject_store)?;
    Ok(reply::json(&design))
}

pub async fn update_design(
    id: DesignId,
    store: Arc<MemoryStore>,
    spec: DesignSpec,
) -> Result<impl Reply, Rejection> {
    spec.validate().map_err(reject_design)?;
    let design = store.update(id, spec).map_err(reject_store)?;
    Ok(reply::json(&design))
}

pub async fn delete_design(id: DesignId, store: Arc<MemoryStore>) -> Result<impl Reply, Rejection> {
    store.delete(id).map_err(reject_store)?;
    Ok(reply::json(&serde_json::json!({
        "message": "Design deleted successfully"
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub design_id: String,
    pub city: String,
}

pub async fn calculate(
    service: Service,
    request: CalculateRequest,
) -> Result<impl Reply, Rejection> {
    let id = parse_design_id(&request.design_id)?;
    let analyzed = service.analyze(id, &request.city).map_err(reject_analysis)?;
    Ok(reply::json(&analyzed))
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub city: String,
    /// Comma-joined design ids, one query parameter for the whole set.
    #[serde(rename = "designIds")]
    pub design_ids: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareResponse {
    comparison_results: Vec<AnalyzedDesign>,
}

pub async fn compare(service: Service, query: CompareQuery) -> Result<impl Reply, Rejection> {
    let ids = parse_design_ids(&query.design_ids)?;
    let results = service.compare(&query.city, &ids).map_err(reject_analysis)?;
    Ok(reply::json(&CompareResponse {
        comparison_results: results,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RankingsQuery {
    #[serde(rename = "designId")]
    pub design_id: String,
}

pub async fn city_rankings(
    service: Service,
    query: RankingsQuery,
) -> Result<impl Reply, Rejection> {
    let id = parse_design_id(&query.design_id)?;
    let rankings = service.city_rankings(id).map_err(reject_analysis)?;
    Ok(reply::json(&rankings))
}

fn parse_design_id(raw: &str) -> Result<DesignId, Rejection> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("invalid design id `{raw}`")))
}

/// Splits a comma-joined id list; the transport already URL-decoded it.
fn parse_design_ids(raw: &str) -> Result<Vec<DesignId>, Rejection> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_design_id)
        .collect()
}
