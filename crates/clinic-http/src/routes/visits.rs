//! Visit endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::NaiveDateTime;
use serde::Deserialize;

use clinic_core::{CreateVisit, VisitView};

use crate::error::ApiError;
use crate::AppState;

pub fn visit_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_visits).post(create_visit))
        .route("/:id", get(get_visit).delete(delete_visit))
        .route("/:id/dateTime", put(update_visit_date_time))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct VisitListParams {
    /// Non-positive or absent means no filter.
    #[serde(default, rename = "patientId")]
    patient_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateVisitDateTime {
    date_time: NaiveDateTime,
}

async fn create_visit(
    State(state): State<Arc<AppState>>,
    Json(cmd): Json<CreateVisit>,
) -> Result<(StatusCode, Json<VisitView>), ApiError> {
    let view = state.service()?.create_visit(&cmd)?;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_visit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<VisitView>, ApiError> {
    Ok(Json(state.service()?.get_visit(id)?))
}

async fn list_visits(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VisitListParams>,
) -> Result<Json<Vec<VisitView>>, ApiError> {
    Ok(Json(state.service()?.list_visits(params.patient_id)?))
}

async fn update_visit_date_time(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(cmd): Json<UpdateVisitDateTime>,
) -> Result<Json<VisitView>, ApiError> {
    Ok(Json(
        state.service()?.update_visit_date_time(id, cmd.date_time)?,
    ))
}

async fn delete_visit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service()?.delete_visit(id)?;
    Ok(StatusCode::NO_CONTENT)
}
