//! Patient models.

use serde::{Deserialize, Serialize};

/// A stored patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Store-assigned id, monotonic and never reused
    pub id: i64,
    /// First name
    pub name: String,
    /// Last name
    pub surname: String,
    /// Postal address
    pub address: String,
    /// Mutation counter, starts at 0 and is bumped on every successful update
    pub version: i64,
}

/// Mutable patient fields, accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientFields {
    pub name: String,
    pub surname: String,
    pub address: String,
}
