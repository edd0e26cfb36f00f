mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::Catalog;
use crate::location::LocationResolver;
pub use handlers::{NearestItem, NearestResponse};
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/churches", get(handlers::directory))
        .route("/api/churches/{id}", get(handlers::church))
        .route("/api/nearest", get(handlers::nearest))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

pub async fn start(
    host: &str,
    port: u16,
    catalog: Arc<Catalog>,
    resolver: LocationResolver,
    default_limit: i64,
) -> std::io::Result<()> {
    let app = build_router(AppState {
        catalog,
        resolver,
        default_limit,
    });
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("church directory listening on http://{}", addr);

    axum::serve(listener, app).await
}
