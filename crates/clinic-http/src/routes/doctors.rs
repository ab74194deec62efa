//! Doctor endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use clinic_core::{Doctor, DoctorFields};

use crate::error::ApiError;
use crate::AppState;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_doctors).post(create_doctor))
        .route(
            "/:id",
            get(get_doctor).put(update_doctor).delete(delete_doctor),
        )
        .with_state(state)
}

async fn create_doctor(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<DoctorFields>,
) -> Result<(StatusCode, Json<Doctor>), ApiError> {
    let doctor = state.service()?.create_doctor(&fields)?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Doctor>, ApiError> {
    Ok(Json(state.service()?.get_doctor(id)?))
}

async fn list_doctors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Doctor>>, ApiError> {
    Ok(Json(state.service()?.list_doctors()?))
}

async fn update_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(fields): Json<DoctorFields>,
) -> Result<Json<Doctor>, ApiError> {
    Ok(Json(state.service()?.update_doctor(id, &fields)?))
}

/// Also removes every visit that references the doctor.
async fn delete_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service()?.delete_doctor(id)?;
    tracing::info!(doctor_id = id, "deleted doctor and dependent visits");
    Ok(StatusCode::NO_CONTENT)
}
