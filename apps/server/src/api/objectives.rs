use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, patch, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};

use waitumusic_core::auth::{is_permitted, Caller, ObjectiveAction};
use waitumusic_core::errors::{Error, ValidationError};
use waitumusic_core::objectives::{
    NewObjective, Objective, ObjectiveStatus, ObjectiveTemplate, ObjectivesReport,
};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ObjectivesListResponse {
    success: bool,
    objectives: Vec<Objective>,
    note: &'static str,
}

async fn get_booking_objectives(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    Path(booking_id): Path<i64>,
) -> ApiResult<Json<ObjectivesListResponse>> {
    let objectives = state
        .objective_service
        .get_objectives(booking_id, &caller)
        .await?;

    Ok(Json(ObjectivesListResponse {
        success: true,
        objectives,
        note: "These objectives are confidential and hidden from bookers",
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ObjectiveResponse {
    success: bool,
    objective: Objective,
    message: &'static str,
}

async fn create_objective(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    Json(new_objective): Json<NewObjective>,
) -> ApiResult<Json<ObjectiveResponse>> {
    let objective = state
        .objective_service
        .create_objective(new_objective, &caller)
        .await?;

    Ok(Json(ObjectiveResponse {
        success: true,
        objective,
        message: "Internal objective created successfully",
    }))
}

#[derive(Deserialize)]
struct UpdateStatusRequest {
    status: Option<String>,
}

async fn update_objective_status(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    Path(objective_id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> ApiResult<Json<ObjectiveResponse>> {
    let status_value = body
        .status
        .ok_or_else(|| ValidationError::MissingField("status".to_string()))?;
    let new_status: ObjectiveStatus = status_value.parse().map_err(ApiError::from)?;

    let objective = state
        .objective_service
        .update_objective_status(objective_id, new_status, &caller)
        .await?;

    Ok(Json(ObjectiveResponse {
        success: true,
        objective,
        message: "Objective status updated successfully",
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplatesResponse {
    success: bool,
    templates: Vec<ObjectiveTemplate>,
}

async fn get_templates(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<Json<TemplatesResponse>> {
    let templates = state.objective_service.objective_templates(&caller)?;
    Ok(Json(TemplatesResponse {
        success: true,
        templates,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AutoGenerateRequest {
    booking_id: i64,
    artist_user_id: i64,
    #[serde(default)]
    booking_type: String,
    artist_managed_status: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AutoGenerateResponse {
    success: bool,
    objectives: Vec<Objective>,
    message: String,
}

async fn auto_generate(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    Json(body): Json<AutoGenerateRequest>,
) -> ApiResult<Json<AutoGenerateResponse>> {
    let objectives = state
        .objective_service
        .generate_automatic_objectives(
            body.booking_id,
            body.artist_user_id,
            &body.booking_type,
            body.artist_managed_status,
            &caller,
        )
        .await?;

    let message = format!(
        "Generated {} automatic objectives for managed artist",
        objectives.len()
    );
    Ok(Json(AutoGenerateResponse {
        success: true,
        objectives,
        message,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportResponse {
    success: bool,
    report: ObjectivesReport,
    booking_id: i64,
}

async fn booking_report(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    Path(booking_id): Path<i64>,
) -> ApiResult<Json<ReportResponse>> {
    // Transport-level gate; consults the same policy as the service.
    if !is_permitted(&caller.role, ObjectiveAction::ViewReport) {
        return Err(ApiError::from(Error::AccessDenied(
            "Access denied - Admin privileges required".to_string(),
        )));
    }

    let report = state
        .objective_service
        .objectives_report(booking_id, &caller)
        .await?;

    Ok(Json(ReportResponse {
        success: true,
        report,
        booking_id,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/booking/{booking_id}", get(get_booking_objectives))
        .route("/booking/{booking_id}/report", get(booking_report))
        .route("/create", post(create_objective))
        .route("/{objective_id}/status", patch(update_objective_status))
        .route("/templates", get(get_templates))
        .route("/auto-generate", post(auto_generate))
}
