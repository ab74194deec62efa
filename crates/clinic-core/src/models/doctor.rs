//! Doctor models.

use serde::{Deserialize, Serialize};

/// A stored doctor record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Store-assigned id, monotonic and never reused
    pub id: i64,
    /// First name
    pub name: String,
    /// Last name
    pub surname: String,
    /// Medical specialization (e.g., "surgeon", "cardiologist")
    pub specialization: String,
    /// Mutation counter, starts at 0 and is bumped on every successful update
    pub version: i64,
}

/// Mutable doctor fields, accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorFields {
    pub name: String,
    pub surname: String,
    pub specialization: String,
}
