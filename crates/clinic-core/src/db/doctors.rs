//! Doctor table operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{Doctor, DoctorFields};

fn row_to_doctor(row: &Row) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        specialization: row.get(3)?,
        version: row.get(4)?,
    })
}

impl Database {
    /// Insert a new doctor, assigning a fresh id and version 0.
    pub fn insert_doctor(&self, fields: &DoctorFields) -> DbResult<Doctor> {
        self.conn.execute(
            "INSERT INTO doctors (name, surname, specialization) VALUES (?1, ?2, ?3)",
            params![fields.name, fields.surname, fields.specialization],
        )?;
        Ok(Doctor {
            id: self.conn.last_insert_rowid(),
            name: fields.name.clone(),
            surname: fields.surname.clone(),
            specialization: fields.specialization.clone(),
            version: 0,
        })
    }

    /// Get a doctor by id.
    pub fn get_doctor(&self, id: i64) -> DbResult<Option<Doctor>> {
        self.conn
            .query_row(
                "SELECT id, name, surname, specialization, version FROM doctors WHERE id = ?",
                [id],
                row_to_doctor,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all doctors. No ordering is guaranteed.
    pub fn list_doctors(&self) -> DbResult<Vec<Doctor>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, surname, specialization, version FROM doctors")?;
        let rows = stmt.query_map([], row_to_doctor)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Update a doctor's mutable fields, bumping the version counter in the
    /// same statement. Returns the post-update record, or `None` if the id
    /// does not exist.
    pub fn update_doctor(&self, id: i64, fields: &DoctorFields) -> DbResult<Option<Doctor>> {
        self.conn
            .query_row(
                "UPDATE doctors SET name = ?1, surname = ?2, specialization = ?3,
                     version = version + 1
                 WHERE id = ?4
                 RETURNING id, name, surname, specialization, version",
                params![fields.name, fields.surname, fields.specialization, id],
                row_to_doctor,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Delete a doctor together with every visit that references it, in one
    /// transaction. Dependents go first so no reader can observe a visit
    /// outliving its doctor. Returns false if the doctor does not exist.
    pub fn delete_doctor_cascading(&mut self, id: i64) -> DbResult<bool> {
        let tx = self.transaction()?;

        let exists = tx
            .query_row("SELECT 1 FROM doctors WHERE id = ?", [id], |_| Ok(()))
            .optional()?
            .is_some();
        if !exists {
            return Ok(false);
        }

        tx.execute("DELETE FROM visits WHERE doctor_id = ?", [id])?;
        tx.execute("DELETE FROM doctors WHERE id = ?", [id])?;
        tx.commit()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateVisit, PatientFields};
    use chrono::NaiveDate;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn jim() -> DoctorFields {
        DoctorFields {
            name: "Jim".into(),
            surname: "Bim".into(),
            specialization: "surgeon".into(),
        }
    }

    #[test]
    fn test_insert_assigns_id_and_version_zero() {
        let db = setup_db();

        let first = db.insert_doctor(&jim()).unwrap();
        let second = db.insert_doctor(&jim()).unwrap();

        assert_eq!(first.version, 0);
        assert!(first.id > 0);
        assert!(second.id > first.id);

        let retrieved = db.get_doctor(first.id).unwrap().unwrap();
        assert_eq!(retrieved, first);
    }

    #[test]
    fn test_get_missing_doctor() {
        let db = setup_db();
        assert!(db.get_doctor(42).unwrap().is_none());
    }

    #[test]
    fn test_update_bumps_version() {
        let db = setup_db();
        let doctor = db.insert_doctor(&jim()).unwrap();

        let updated = db
            .update_doctor(
                doctor.id,
                &DoctorFields {
                    name: "Jim".into(),
                    surname: "Bim".into(),
                    specialization: "cardiologist".into(),
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.specialization, "cardiologist");
        assert_eq!(updated.version, 1);

        let again = db.update_doctor(doctor.id, &jim()).unwrap().unwrap();
        assert_eq!(again.version, 2);
    }

    #[test]
    fn test_update_missing_doctor_returns_none() {
        let db = setup_db();
        assert!(db.update_doctor(42, &jim()).unwrap().is_none());
    }

    #[test]
    fn test_cascading_delete_removes_only_own_visits() {
        let mut db = setup_db();

        let doomed = db.insert_doctor(&jim()).unwrap();
        let survivor = db.insert_doctor(&jim()).unwrap();
        let patient = db
            .insert_patient(&PatientFields {
                name: "Ann".into(),
                surname: "Lee".into(),
                address: "addr".into(),
            })
            .unwrap();

        let when = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        db.insert_visit(&CreateVisit {
            date_time: when,
            location: "Health 123".into(),
            doctor_id: doomed.id,
            patient_id: patient.id,
        })
        .unwrap();
        let kept = db
            .insert_visit(&CreateVisit {
                date_time: when,
                location: "Amazing 22".into(),
                doctor_id: survivor.id,
                patient_id: patient.id,
            })
            .unwrap();

        assert!(db.delete_doctor_cascading(doomed.id).unwrap());

        assert!(db.get_doctor(doomed.id).unwrap().is_none());
        let remaining = db.list_visits().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
    }

    #[test]
    fn test_cascading_delete_missing_doctor() {
        let mut db = setup_db();
        assert!(!db.delete_doctor_cascading(42).unwrap());
    }
}
