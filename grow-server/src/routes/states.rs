//! State, lane and areas-we-serve routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::{Deserialize, Serialize};

use grow_core::{ApiResponse, LaneEntity, RouteOutcome};

use super::{api_path, outcome_response, EntitySummary};
use crate::AppState;

/// State listing entry
#[derive(Debug, Serialize)]
pub struct StateSummary {
    pub slug: String,
    pub name: String,
    pub abbreviation: String,
    pub path: String,
    pub lane_count: usize,
}

/// Query parameters of the state listing
#[derive(Debug, Default, Deserialize)]
pub struct ListStatesParams {
    /// Redirect to the first state, the way the site's `/states` page does
    #[serde(default)]
    pub redirect: bool,
}

/// All states in site order
pub async fn list_states(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListStatesParams>,
) -> Response {
    if params.redirect {
        return outcome_response(state.router().states_index(), "State", "index");
    }

    let states: Vec<StateSummary> = state
        .site
        .states()
        .iter()
        .map(|s| StateSummary {
            slug: s.slug.clone(),
            name: s.display_name.clone(),
            abbreviation: s.abbreviation.clone(),
            path: state.resolver.state_path(&s.slug),
            lane_count: s.lanes.len(),
        })
        .collect();

    Json(ApiResponse::ok(states)).into_response()
}

/// One state; bare segments redirect to the canonical suffixed one
pub async fn get_state(State(state): State<Arc<AppState>>, Path(segment): Path<String>) -> Response {
    outcome_response(state.router().state_page(&segment), "State", &segment)
}

/// Lanes owned by a state
pub async fn list_lanes(State(state): State<Arc<AppState>>, Path(segment): Path<String>) -> Response {
    let outcome = state.router().state_page(&segment).map(|found| {
        state
            .site
            .lanes()
            .lanes_by_state(&found.slug)
            .into_iter()
            .map(|lane| EntitySummary {
                slug: lane.slug.clone(),
                name: lane.display_name.clone(),
                path: state.resolver.lane_path(&lane.state_slug, &lane.slug),
            })
            .collect::<Vec<_>>()
    });

    // A bare state segment redirects to the canonical lane listing
    let outcome = match outcome {
        RouteOutcome::Redirect(path) => RouteOutcome::Redirect(format!("{}/lanes", path)),
        other => other,
    };
    outcome_response(outcome, "State", &segment)
}

/// Lane page body: the lane and the state that owns it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneResponse<'a> {
    pub state_slug: &'a str,
    pub state_name: &'a str,
    pub canonical_path: String,
    pub lane: &'a LaneEntity,
}

/// One lane within a state
pub async fn get_lane(
    State(state): State<Arc<AppState>>,
    Path((state_segment, lane_segment)): Path<(String, String)>,
) -> Response {
    let outcome = state
        .router()
        .lane_page(&state_segment, &lane_segment)
        .map(|page| LaneResponse {
            state_slug: &page.state.slug,
            state_name: &page.state.display_name,
            canonical_path: state.resolver.lane_path(&page.state.slug, &page.lane.slug),
            lane: page.lane,
        });

    outcome_response(outcome, "Lane", &format!("{}/{}", state_segment, lane_segment))
}

/// `/v1/areas-we-serve/{*path}`: always a redirect
pub async fn areas_we_serve(State(state): State<Arc<AppState>>, Path(path): Path<String>) -> Redirect {
    let segments: Vec<&str> = path.split('/').collect();
    Redirect::permanent(&api_path(&state.router().areas_we_serve(&segments)))
}

/// `/v1/areas-we-serve` with no path
pub async fn areas_we_serve_root() -> Redirect {
    Redirect::permanent(&api_path("/states"))
}
