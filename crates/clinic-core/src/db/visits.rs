//! Visit table operations.

use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{CreateVisit, Visit};

fn row_to_visit(row: &Row) -> rusqlite::Result<Visit> {
    Ok(Visit {
        id: row.get(0)?,
        date_time: row.get(1)?,
        location: row.get(2)?,
        doctor_id: row.get(3)?,
        patient_id: row.get(4)?,
        version: row.get(5)?,
    })
}

impl Database {
    /// Insert a new visit, assigning a fresh id and version 0. Reference
    /// checks happen in the service layer before this is called.
    pub fn insert_visit(&self, fields: &CreateVisit) -> DbResult<Visit> {
        self.conn.execute(
            "INSERT INTO visits (date_time, location, doctor_id, patient_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.date_time,
                fields.location,
                fields.doctor_id,
                fields.patient_id
            ],
        )?;
        Ok(Visit {
            id: self.conn.last_insert_rowid(),
            date_time: fields.date_time,
            location: fields.location.clone(),
            doctor_id: fields.doctor_id,
            patient_id: fields.patient_id,
            version: 0,
        })
    }

    /// Get a visit by id.
    pub fn get_visit(&self, id: i64) -> DbResult<Option<Visit>> {
        self.conn
            .query_row(
                "SELECT id, date_time, location, doctor_id, patient_id, version
                 FROM visits WHERE id = ?",
                [id],
                row_to_visit,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all visits. No ordering is guaranteed.
    pub fn list_visits(&self) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date_time, location, doctor_id, patient_id, version FROM visits",
        )?;
        let rows = stmt.query_map([], row_to_visit)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List visits referencing the given patient.
    pub fn list_visits_by_patient(&self, patient_id: i64) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date_time, location, doctor_id, patient_id, version
             FROM visits WHERE patient_id = ?",
        )?;
        let rows = stmt.query_map([patient_id], row_to_visit)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Update a visit's date-time only, bumping the version counter in the
    /// same statement. All other fields are untouched. Returns the
    /// post-update record, or `None` if the id does not exist.
    pub fn update_visit_date_time(
        &self,
        id: i64,
        date_time: NaiveDateTime,
    ) -> DbResult<Option<Visit>> {
        self.conn
            .query_row(
                "UPDATE visits SET date_time = ?1, version = version + 1
                 WHERE id = ?2
                 RETURNING id, date_time, location, doctor_id, patient_id, version",
                params![date_time, id],
                row_to_visit,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Delete a visit.
    pub fn delete_visit(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM visits WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DoctorFields, PatientFields};
    use chrono::NaiveDate;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn seed_refs(db: &Database) -> (i64, i64) {
        let doctor = db
            .insert_doctor(&DoctorFields {
                name: "Jim".into(),
                surname: "Bim".into(),
                specialization: "surgeon".into(),
            })
            .unwrap();
        let patient = db
            .insert_patient(&PatientFields {
                name: "Ann".into(),
                surname: "Lee".into(),
                address: "addr".into(),
            })
            .unwrap();
        (doctor.id, patient.id)
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_insert_and_get_round_trips_date_time() {
        let db = setup_db();
        let (doctor_id, patient_id) = seed_refs(&db);

        let when = at(2020, 1, 1, 12);
        let visit = db
            .insert_visit(&CreateVisit {
                date_time: when,
                location: "Health 123".into(),
                doctor_id,
                patient_id,
            })
            .unwrap();
        assert_eq!(visit.version, 0);

        let retrieved = db.get_visit(visit.id).unwrap().unwrap();
        assert_eq!(retrieved.date_time, when);
        assert_eq!(retrieved.location, "Health 123");
    }

    #[test]
    fn test_update_date_time_touches_nothing_else() {
        let db = setup_db();
        let (doctor_id, patient_id) = seed_refs(&db);

        let visit = db
            .insert_visit(&CreateVisit {
                date_time: at(2020, 1, 1, 12),
                location: "Health 123".into(),
                doctor_id,
                patient_id,
            })
            .unwrap();

        let moved = at(2020, 1, 2, 12);
        let updated = db.update_visit_date_time(visit.id, moved).unwrap().unwrap();

        assert_eq!(updated.date_time, moved);
        assert_eq!(updated.location, visit.location);
        assert_eq!(updated.doctor_id, visit.doctor_id);
        assert_eq!(updated.patient_id, visit.patient_id);
        assert_eq!(updated.version, visit.version + 1);
    }

    #[test]
    fn test_update_missing_visit_returns_none() {
        let db = setup_db();
        assert!(db
            .update_visit_date_time(42, at(2020, 1, 1, 12))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_list_by_patient_filters() {
        let db = setup_db();
        let (doctor_id, patient_id) = seed_refs(&db);
        let (_, other_patient_id) = seed_refs(&db);

        for (pid, hour) in [(patient_id, 9), (patient_id, 10), (other_patient_id, 11)] {
            db.insert_visit(&CreateVisit {
                date_time: at(2021, 6, 1, hour),
                location: "Clinic".into(),
                doctor_id,
                patient_id: pid,
            })
            .unwrap();
        }

        assert_eq!(db.list_visits().unwrap().len(), 3);
        let filtered = db.list_visits_by_patient(patient_id).unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|v| v.patient_id == patient_id));
    }

    #[test]
    fn test_delete_visit() {
        let db = setup_db();
        let (doctor_id, patient_id) = seed_refs(&db);

        let visit = db
            .insert_visit(&CreateVisit {
                date_time: at(2020, 1, 1, 12),
                location: "Health 123".into(),
                doctor_id,
                patient_id,
            })
            .unwrap();

        assert!(db.delete_visit(visit.id).unwrap());
        assert!(db.get_visit(visit.id).unwrap().is_none());
        assert!(!db.delete_visit(visit.id).unwrap());
    }
}
