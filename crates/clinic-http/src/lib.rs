//! HTTP API for the clinic record service.
//!
//! Thin axum layer over [`clinic_core::ClinicService`]: routing,
//! JSON (de)serialization, and status-code mapping live here; all
//! consistency rules live in the core crate.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use clinic_core::{ClinicError, ClinicService};

use crate::error::ApiError;
use crate::routes::{doctor_routes, patient_routes, visit_routes};

/// State shared across handlers. The service owns a single SQLite
/// connection, so mutations are serialized behind a mutex; SQLite's
/// transactional guarantees do the rest.
pub struct AppState {
    service: Mutex<ClinicService>,
}

impl AppState {
    pub fn new(service: ClinicService) -> Self {
        Self {
            service: Mutex::new(service),
        }
    }

    /// Lock the service for one request. A poisoned lock is reported as a
    /// storage fault rather than a panic.
    pub(crate) fn service(&self) -> Result<MutexGuard<'_, ClinicService>, ApiError> {
        self.service
            .lock()
            .map_err(|_| ApiError(ClinicError::Unavailable("service lock poisoned".into())))
    }
}

/// Build the complete router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/patients", patient_routes(state.clone()))
        .nest("/visits", visit_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
