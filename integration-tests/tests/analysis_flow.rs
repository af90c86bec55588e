//! End-to-end flows through the store and the analysis service.

use std::sync::Arc;

use approx::assert_relative_eq;
use integration_tests::{glass_box, glass_box_with_skylight, glass_box_with_wwr};
use solgain_core::{AnalysisError, AnalysisService, DesignId, RankingEntry};
use solgain_store::MemoryStore;

fn app() -> (Arc<MemoryStore>, AnalysisService<Arc<MemoryStore>>) {
    let store = Arc::new(MemoryStore::new());
    let service = AnalysisService::new(Arc::clone(&store));
    (store, service)
}

#[test]
fn analyze_a_created_design() {
    let (store, service) = app();
    let design = store.create(glass_box("Reference"));

    let analyzed = service.analyze(design.id, "Delhi").unwrap();

    assert_eq!(analyzed.design.id, design.id);
    assert_relative_eq!(analyzed.analysis.total_heat_gain, 4176.0);
    assert_relative_eq!(analyzed.analysis.cooling_cost, 2.6);
}

#[test]
fn skylight_raises_every_figure() {
    let (store, service) = app();
    let plain = store.create(glass_box("Plain"));
    let lit = store.create(glass_box_with_skylight("Skylit"));

    let plain = service.analyze(plain.id, "Mumbai").unwrap().analysis;
    let lit = service.analyze(lit.id, "Mumbai").unwrap().analysis;

    assert!(lit.total_heat_gain > plain.total_heat_gain);
    assert!(lit.cooling_load_kwh > plain.cooling_load_kwh);
    assert!(lit.energy_consumed_kwh > plain.energy_consumed_kwh);
    assert!(lit.cooling_cost > plain.cooling_cost);
}

#[test]
fn compare_orders_results_by_the_store_not_the_request() {
    let (store, service) = app();
    let first = store.create(glass_box_with_wwr("Modest", 0.2));
    let second = store.create(glass_box_with_wwr("Glassy", 0.8));

    let results = service.compare("Kolkata", &[second.id, first.id]).unwrap();

    assert_eq!(results.len(), 2);
    let mut ids: Vec<DesignId> = vec![first.id, second.id];
    ids.sort();
    let fetched: Vec<DesignId> = results.iter().map(|r| r.design.id).collect();
    assert_eq!(fetched, ids);
}

#[test]
fn compare_fails_when_any_design_is_missing() {
    let (store, service) = app();
    let design = store.create(glass_box("Lonely"));

    let result = service.compare("Delhi", &[design.id, DesignId::new()]);

    assert_eq!(result, Err(AnalysisError::DesignsNotFound));
}

#[test]
fn identical_designs_compare_equal() {
    let (store, service) = app();
    let first = store.create(glass_box("Twin A"));
    let second = store.create(glass_box("Twin B"));

    let results = service.compare("Bangalore", &[first.id, second.id]).unwrap();

    assert_eq!(results[0].analysis, results[1].analysis);
}

#[test]
fn rankings_follow_the_tariff_and_radiation_tables() {
    let (store, service) = app();
    let design = store.create(glass_box("Reference"));

    let rankings = service.city_rankings(design.id).unwrap();

    let cities: Vec<String> = rankings
        .city_rankings
        .iter()
        .map(|entry| match entry {
            RankingEntry::Ranked { city, .. } => city.to_string(),
            RankingEntry::Failed { city, .. } => panic!("{city} should rank"),
        })
        .collect();

    // Cheapest combination of intensity and tariff first.
    assert_eq!(cities, ["Bangalore", "Delhi", "Kolkata", "Mumbai"]);
}

#[test]
fn a_deleted_design_is_gone_for_every_operation() {
    let (store, service) = app();
    let design = store.create(glass_box("Doomed"));
    let survivor = store.create(glass_box("Survivor"));

    store.delete(design.id).unwrap();

    assert_eq!(
        service.analyze(design.id, "Delhi"),
        Err(AnalysisError::DesignNotFound(design.id))
    );
    assert_eq!(
        service.compare("Delhi", &[design.id, survivor.id]),
        Err(AnalysisError::DesignsNotFound)
    );
    assert_eq!(
        service.city_rankings(design.id),
        Err(AnalysisError::DesignNotFound(design.id))
    );
}

#[test]
fn an_updated_design_analyzes_with_its_new_fields() {
    let (store, service) = app();
    let design = store.create(glass_box_with_wwr("Mutable", 0.2));
    let before = service.analyze(design.id, "Delhi").unwrap().analysis;

    store
        .update(design.id, glass_box_with_wwr("Mutable", 0.8))
        .unwrap();
    let after = service.analyze(design.id, "Delhi").unwrap().analysis;

    assert_relative_eq!(after.total_heat_gain, 4.0 * before.total_heat_gain);
}
