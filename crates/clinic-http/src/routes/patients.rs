//! Patient endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use clinic_core::{Patient, PatientFields};

use crate::error::ApiError;
use crate::AppState;

pub fn patient_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route(
            "/:id",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .with_state(state)
}

async fn create_patient(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<PatientFields>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let patient = state.service()?.create_patient(&fields)?;
    Ok((StatusCode::CREATED, Json(patient)))
}

async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(state.service()?.get_patient(id)?))
}

async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(state.service()?.list_patients()?))
}

async fn update_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(fields): Json<PatientFields>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(state.service()?.update_patient(id, &fields)?))
}

/// Visits referencing the patient are left in place.
async fn delete_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service()?.delete_patient(id)?;
    Ok(StatusCode::NO_CONTENT)
}
