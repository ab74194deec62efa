//! Service layer: cross-entity consistency rules on top of the database.
//!
//! Doctors and patients are plain pass-through CRUD. Visits carry the
//! interesting rules: reference validation before creation, version-counted
//! field updates, and cascade deletion of a doctor's visits.

mod doctors;
mod patients;
mod visits;

use std::fmt;

use thiserror::Error;

use crate::db::{Database, DbError};

/// Which foreign reference on a visit failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefField {
    Doctor,
    Patient,
}

impl fmt::Display for RefField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefField::Doctor => f.write_str("doctor"),
            RefField::Patient => f.write_str("patient"),
        }
    }
}

/// Errors surfaced to callers of the service layer. `NotFound` and
/// `InvalidReference` are expected outcomes; `Unavailable` is a storage
/// fault the caller may retry.
#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("record not found")]
    NotFound,

    #[error("Invalid {field} ID: {id}")]
    InvalidReference { field: RefField, id: i64 },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<DbError> for ClinicError {
    fn from(e: DbError) -> Self {
        ClinicError::Unavailable(e.to_string())
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;

/// Facade exposing doctor, patient, and visit operations over one database.
pub struct ClinicService {
    db: Database,
}

impl ClinicService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
