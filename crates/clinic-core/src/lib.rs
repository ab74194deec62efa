//! Clinic Core Library
//!
//! Clinical record management: doctors, patients, and the visits connecting
//! them, backed by SQLite.
//!
//! # Architecture
//!
//! ```text
//! caller (HTTP layer, tests)
//!        │
//!        ▼
//! ClinicService ── reference validation (visit creation)
//!        │          version counting (every field update)
//!        │          cascade deletion (doctor → its visits)
//!        ▼
//!    Database ──── one id-keyed table per record type
//! ```
//!
//! Relationships are modeled as plain id columns plus on-demand lookup, not
//! object graphs: a visit stores `doctor_id`/`patient_id` and read views
//! join the current snapshots. Doctor deletion removes dependent visits in
//! the same transaction; patient deletion leaves them, so a visit's patient
//! reference may dangle and its view then carries no patient snapshot.
//!
//! # Modules
//!
//! - [`db`]: SQLite persistence layer
//! - [`models`]: record types, commands, and read views
//! - [`service`]: the consistency rules and caller-facing operations

pub mod db;
pub mod models;
pub mod service;

pub use db::{Database, DbError, DbResult};
pub use models::{
    CreateVisit, Doctor, DoctorFields, Patient, PatientFields, Visit, VisitView,
};
pub use service::{ClinicError, ClinicResult, ClinicService, RefField};
