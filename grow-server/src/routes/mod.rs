//! HTTP route handlers

mod collections;
mod content;
mod states;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;

use grow_core::{ApiResponse, ContentError, RouteOutcome};

use crate::AppState;

/// Prefix a site path with the API version
pub(crate) fn api_path(path: &str) -> String {
    format!("/v1{}", path)
}

/// Listing entry shared by every collection
#[derive(Debug, Serialize)]
pub struct EntitySummary {
    pub slug: String,
    pub name: String,
    pub path: String,
}

/// Found renders JSON, Redirect is a 308 to the API form of the path
pub(crate) fn outcome_response<T: Serialize>(outcome: RouteOutcome<T>, what: &str, key: &str) -> Response {
    match outcome {
        RouteOutcome::Found(data) => Json(ApiResponse::ok(data)).into_response(),
        RouteOutcome::Redirect(path) => Redirect::permanent(&api_path(&path)).into_response(),
        RouteOutcome::NotFound => {
            tracing::debug!(what, key, "no match");
            (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::not_found(what, key))).into_response()
        }
    }
}

pub(crate) fn error_response(err: &ContentError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiResponse::<()>::from(err))).into_response()
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub entities: usize,
}

async fn health(axum::extract::State(state): axum::extract::State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entities: state.site.entity_count(),
    })
}

/// Create the router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/states", get(states::list_states))
        .route("/v1/states/:state", get(states::get_state))
        .route("/v1/states/:state/lanes", get(states::list_lanes))
        .route("/v1/states/:state/lanes/:lane", get(states::get_lane))
        .route("/v1/partners", get(collections::list_partners))
        .route("/v1/partners/:slug", get(collections::get_partner))
        .route("/v1/careers", get(collections::list_careers))
        .route("/v1/careers/:slug", get(collections::get_career))
        .route("/v1/truck-types", get(collections::list_truck_types))
        .route("/v1/truck-types/:slug", get(collections::get_truck_type))
        .route("/v1/areas-we-serve", get(states::areas_we_serve_root))
        .route("/v1/areas-we-serve/*path", get(states::areas_we_serve))
        .route("/v1/content/validate/:template", post(content::validate_content))
        .route("/sitemap.xml", get(content::sitemap))
        .route("/robots.txt", get(content::robots))
        .with_state(state)
}
