//! HTTP request handlers for the Materials Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_all_material_costs, calculate_patio_excavation_depth};

use super::request::{ExcavationDepthRequest, MaterialCalculationRequest};
use super::response::{ApiError, ApiErrorResponse, MaterialCalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/materials/calculate", post(calculate_handler))
        .route("/materials/excavation-depth", post(excavation_depth_handler))
        .with_state(state)
}

/// Handler for POST /materials/calculate endpoint.
///
/// Accepts a calculation request and returns the cost breakdown of every
/// material category of the requested service.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<MaterialCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing material calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                correlation_id,
            )));
        }
    };

    let (company_id, service_config_id, input) = request.into_parts();

    if let Err(err) = input.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Calculation input rejected"
        );
        return error_response(err.into());
    }

    let start_time = Instant::now();
    match calculate_all_material_costs(state.catalog(), &input, &company_id, &service_config_id)
        .await
    {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                company_id = %company_id,
                service_config_id = %service_config_id,
                categories_count = result.categories.len(),
                skipped_count = result.audit_trace.warnings.len(),
                total_cost = %result.total_cost,
                duration_us = duration.as_micros(),
                "Material calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(MaterialCalculationResponse::new(result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Material calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /materials/excavation-depth endpoint.
///
/// Returns the excavation depth estimate for the paver patio service. The
/// estimate falls back to default depths rather than failing.
async fn excavation_depth_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExcavationDepthRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing excavation depth request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                correlation_id,
            )));
        }
    };

    if request.service_config_id != state.patio_service_config_id() {
        warn!(
            correlation_id = %correlation_id,
            service_config_id = %request.service_config_id,
            "Excavation depth requested for unsupported service"
        );
        return error_response(ApiErrorResponse::bad_request(ApiError::with_details(
            "VALIDATION_ERROR",
            format!(
                "Excavation depth is not offered for service '{}'",
                request.service_config_id
            ),
            format!(
                "Excavation depth is only offered for service '{}'",
                state.patio_service_config_id()
            ),
        )));
    }

    let start_time = Instant::now();
    let depth = calculate_patio_excavation_depth(
        state.catalog(),
        &request.selected_materials,
        &request.company_id,
        &request.service_config_id,
    )
    .await;

    info!(
        correlation_id = %correlation_id,
        depth_inches = %depth.depth_inches,
        duration_us = start_time.elapsed().as_micros(),
        "Excavation depth completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(depth),
    )
        .into_response()
}

/// Maps a JSON extraction failure to an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
