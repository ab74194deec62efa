//! Patient table operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{Patient, PatientFields};

fn row_to_patient(row: &Row) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        address: row.get(3)?,
        version: row.get(4)?,
    })
}

impl Database {
    /// Insert a new patient, assigning a fresh id and version 0.
    pub fn insert_patient(&self, fields: &PatientFields) -> DbResult<Patient> {
        self.conn.execute(
            "INSERT INTO patients (name, surname, address) VALUES (?1, ?2, ?3)",
            params![fields.name, fields.surname, fields.address],
        )?;
        Ok(Patient {
            id: self.conn.last_insert_rowid(),
            name: fields.name.clone(),
            surname: fields.surname.clone(),
            address: fields.address.clone(),
            version: 0,
        })
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                "SELECT id, name, surname, address, version FROM patients WHERE id = ?",
                [id],
                row_to_patient,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients. No ordering is guaranteed.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, surname, address, version FROM patients")?;
        let rows = stmt.query_map([], row_to_patient)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Update a patient's mutable fields, bumping the version counter in the
    /// same statement. Returns the post-update record, or `None` if the id
    /// does not exist.
    pub fn update_patient(&self, id: i64, fields: &PatientFields) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                "UPDATE patients SET name = ?1, surname = ?2, address = ?3,
                     version = version + 1
                 WHERE id = ?4
                 RETURNING id, name, surname, address, version",
                params![fields.name, fields.surname, fields.address, id],
                row_to_patient,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Delete a patient. Visits referencing the patient are left in place;
    /// their patient reference is allowed to dangle.
    pub fn delete_patient(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patients WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
