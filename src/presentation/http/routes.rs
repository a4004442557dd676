// src/presentation/http/routes.rs
use crate::presentation::http::controllers::records;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/records", post(records::create_record))
        .route(
            "/api/v1/records/by-slug/{slug}",
            get(records::get_record_by_slug),
        )
        .route(
            "/api/v1/records/{id}",
            axum::routing::delete(records::delete_record),
        )
        .route(
            "/api/v1/records/{id}/slugs/{locale}",
            put(records::set_slug),
        )
        .route("/api/v1/slugs/next", get(records::next_slug))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
