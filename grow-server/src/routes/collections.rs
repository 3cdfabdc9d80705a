//! Partner, career and truck type routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Json, Response},
};

use grow_core::{ApiResponse, Entity, Registry};

use super::{outcome_response, EntitySummary};
use crate::AppState;

fn summaries<E: Entity<Key = String>>(registry: &Registry<E>, prefix: &str) -> Vec<EntitySummary> {
    registry
        .iter()
        .map(|entity| EntitySummary {
            slug: entity.slug().to_string(),
            name: entity.display_name().to_string(),
            path: format!("{}/{}", prefix, entity.slug()),
        })
        .collect()
}

pub async fn list_partners(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<EntitySummary>>> {
    Json(ApiResponse::ok(summaries(state.site.partners(), "/partners")))
}

pub async fn get_partner(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    outcome_response(state.router().partner_page(&slug), "Partner", &slug)
}

pub async fn list_careers(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<EntitySummary>>> {
    Json(ApiResponse::ok(summaries(state.site.jobs(), "/careers")))
}

pub async fn get_career(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    outcome_response(state.router().career_page(&slug), "Job opening", &slug)
}

pub async fn list_truck_types(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<EntitySummary>>> {
    Json(ApiResponse::ok(summaries(state.site.truck_types(), "/truck-type")))
}

pub async fn get_truck_type(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    outcome_response(state.router().truck_type_page(&slug), "Truck type", &slug)
}
