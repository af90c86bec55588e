use std::{convert::Infallible, sync::Arc};

use warp::{Filter, Rejection, Reply};

use solgain_core::DesignId;
use solgain_store::MemoryStore;

use crate::handlers::{self, CompareQuery, RankingsQuery, Service};

/// The full API: design CRUD plus the analysis operations.
pub fn api(
    store: Arc<MemoryStore>,
    service: Service,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    designs(store).or(analysis(service))
}

fn designs(
    store: Arc<MemoryStore>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let create = warp::path!("api" / "designs")
        .and(warp::post())
        .and(with_store(Arc::clone(&store)))
        .and(warp::body::json())
        .and_then(handlers::create_design);

    let list = warp::path!("api" / "designs")
        .and(warp::get())
        .and(with_store(Arc::clone(&store)))
        .and_then(handlers::list_designs);

    let get = warp::path!("api" / "designs" / DesignId)
        .and(warp::get())
        .and(with_store(Arc::clone(&store)))
        .and_then(handlers::get_design);

    let update = warp::path!("api" / "designs" / DesignId)
        .and(warp::put())
        .and(with_store(Arc::clone(&store)))
        .and(warp::body::json())
        .and_then(handlers::update_design);

    let delete = warp::path!("api" / "designs" / DesignId)
        .and(warp::delete())
        .and(with_store(store))
        .and_then(handlers::delete_design);

    create.or(list).or(get).or(update).or(delete)
}

fn analysis(service: Service) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let calculate = warp::path!("api" / "analysis" / "calculate")
        .and(warp::post())
        .and(with_service(service.clone()))
        .and(warp::body::json())
        .and_then(handlers::calculate);

    let compare = warp::path!("api" / "analysis" / "compare")
        .and(warp::get())
        .and(with_service(service.clone()))
        .and(warp::query::<CompareQuery>())
        .and_then(handlers::compare);

    let cities = warp::path!("api" / "analysis" / "cities")
        .and(warp::get())
        .and(with_service(service))
        .and(warp::query::<RankingsQuery>())
        .and_then(handlers::city_rankings);

    calculate.or(compare).or(cities)
}

fn with_store(
    store: Arc<MemoryStore>,
) -> impl Filter<Extract = (Arc<MemoryStore>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&store))
}

fn with_service(service: Service) -> impl Filter<Extract = (Service,), Error = Infallible> + Clone {
    warp::any().map(move || service.clone())
}
