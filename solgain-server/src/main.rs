//! JSON HTTP server for the solgain design and analysis API.

mod error;
mod filters;
mod handlers;

use std::sync::Arc;

use warp::Filter;

use solgain_core::AnalysisService;
use solgain_store::MemoryStore;

#[tokio::main]
async fn main() {
    env_logger::init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3090);

    let store = Arc::new(MemoryStore::new());
    let service = AnalysisService::new(Arc::clone(&store));

    let routes = filters::api(store, service)
        .recover(error::handle_rejection)
        .with(warp::log("solgain::server"));

    log::info!("listening on http://127.0.0.1:{port}");
    warp::serve(routes).run(([127, 0, 0, 1], port)).await;
}
