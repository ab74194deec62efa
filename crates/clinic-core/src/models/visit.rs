//! Visit models and the caller-facing visit view.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Doctor, Patient};

/// A stored visit record. Doctor and patient are plain id references;
/// snapshots are resolved on demand when building a [`VisitView`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    /// Store-assigned id, monotonic and never reused
    pub id: i64,
    /// Scheduled wall-clock time, no zone
    pub date_time: NaiveDateTime,
    /// Free-text location
    pub location: String,
    /// Referenced doctor id (validated at creation)
    pub doctor_id: i64,
    /// Referenced patient id (validated at creation, may dangle later)
    pub patient_id: i64,
    /// Mutation counter, starts at 0 and is bumped on every successful update
    pub version: i64,
}

/// Fields accepted when creating a visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVisit {
    pub date_time: NaiveDateTime,
    pub location: String,
    pub doctor_id: i64,
    pub patient_id: i64,
}

/// A visit as returned to callers, with the doctor and patient records
/// embedded as read-time snapshots. A snapshot is `None` when the referenced
/// record no longer exists (patient deletion does not cascade to visits).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisitView {
    pub id: i64,
    pub date_time: NaiveDateTime,
    pub location: String,
    pub doctor: Option<Doctor>,
    pub patient: Option<Patient>,
    pub version: i64,
}

impl Visit {
    /// Build the caller-facing view from this record and resolved snapshots.
    pub fn into_view(self, doctor: Option<Doctor>, patient: Option<Patient>) -> VisitView {
        VisitView {
            id: self.id,
            date_time: self.date_time,
            location: self.location,
            doctor,
            patient,
            version: self.version,
        }
    }
}
