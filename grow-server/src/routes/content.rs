//! Content linting and SEO routes

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;

use grow_core::structure::template_by_name;
use grow_core::{robots_txt, ApiResponse, ContentError, SitemapBuilder, StructureValidator};

use super::error_response;
use crate::AppState;

/// Validate a content object against a built-in page template.
///
/// 200 when the content is valid, 422 with the full error list when not.
/// An unknown template is 404 whatever the body; a body that is not JSON
/// is 400. Both carry the envelope.
pub async fn validate_content(
    Path(template): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Some(page_template) = template_by_name(&template) else {
        return error_response(&ContentError::UnknownTemplate { name: template });
    };

    let content = match body {
        Ok(Json(content)) => content,
        Err(rejection) => {
            tracing::debug!(template = %template, error = %rejection.body_text(), "rejected content body");
            let body = ApiResponse::<()>::failure("Request body is not valid JSON")
                .with_field_errors("body", [rejection.body_text()]);
            return (rejection.status(), Json(body)).into_response();
        }
    };

    let report = StructureValidator::new().validate(&content, page_template);
    let status = if report.is_valid {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let mut body = ApiResponse::ok(report.clone()).with_message(report.summary());
    body.success = report.is_valid;
    if !report.is_valid {
        body = body.with_field_errors("sections", report.errors);
    }

    (status, Json(body)).into_response()
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> Response {
    let xml = SitemapBuilder::new(&state.config.base_url, &state.resolver).to_xml(&state.site);
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}

pub async fn robots(State(state): State<Arc<AppState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.config.base_url),
    )
        .into_response()
}
