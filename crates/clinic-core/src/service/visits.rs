//! Visit orchestration: reference validation, versioned date-time updates,
//! and snapshot-embedding read views.

use chrono::NaiveDateTime;

use super::{ClinicError, ClinicResult, ClinicService, RefField};
use crate::models::{CreateVisit, Doctor, Patient, Visit, VisitView};

impl ClinicService {
    /// Confirm both referenced records exist. The doctor is checked before
    /// the patient so a request with two bad references always reports the
    /// doctor.
    fn check_visit_references(
        &self,
        doctor_id: i64,
        patient_id: i64,
    ) -> ClinicResult<(Doctor, Patient)> {
        let doctor = self
            .db
            .get_doctor(doctor_id)?
            .ok_or(ClinicError::InvalidReference {
                field: RefField::Doctor,
                id: doctor_id,
            })?;
        let patient = self
            .db
            .get_patient(patient_id)?
            .ok_or(ClinicError::InvalidReference {
                field: RefField::Patient,
                id: patient_id,
            })?;
        Ok((doctor, patient))
    }

    /// Resolve the doctor and patient snapshots for a stored visit. A missing
    /// snapshot stays empty rather than failing the read: patient deletion
    /// does not cascade, so stale references are expected.
    fn visit_view(&self, visit: Visit) -> ClinicResult<VisitView> {
        let doctor = self.db.get_doctor(visit.doctor_id)?;
        let patient = self.db.get_patient(visit.patient_id)?;
        Ok(visit.into_view(doctor, patient))
    }

    /// Create a visit. References are validated first; nothing is persisted
    /// when validation fails. The returned view embeds the doctor and
    /// patient exactly as stored at creation time.
    pub fn create_visit(&self, cmd: &CreateVisit) -> ClinicResult<VisitView> {
        let (doctor, patient) = self.check_visit_references(cmd.doctor_id, cmd.patient_id)?;
        let visit = self.db.insert_visit(cmd)?;
        Ok(visit.into_view(Some(doctor), Some(patient)))
    }

    /// Move a visit to a new date-time. Only the date-time changes; the
    /// version counter goes up by exactly one.
    pub fn update_visit_date_time(
        &self,
        id: i64,
        date_time: NaiveDateTime,
    ) -> ClinicResult<VisitView> {
        let visit = self
            .db
            .update_visit_date_time(id, date_time)?
            .ok_or(ClinicError::NotFound)?;
        self.visit_view(visit)
    }

    pub fn delete_visit(&self, id: i64) -> ClinicResult<()> {
        if self.db.delete_visit(id)? {
            Ok(())
        } else {
            Err(ClinicError::NotFound)
        }
    }

    /// List visits, optionally filtered by patient. A non-positive
    /// `patient_id` means no filter; zero is never a valid id.
    pub fn list_visits(&self, patient_id: i64) -> ClinicResult<Vec<VisitView>> {
        let visits = if patient_id > 0 {
            self.db.list_visits_by_patient(patient_id)?
        } else {
            self.db.list_visits()?
        };
        visits.into_iter().map(|v| self.visit_view(v)).collect()
    }

    pub fn get_visit(&self, id: i64) -> ClinicResult<VisitView> {
        let visit = self.db.get_visit(id)?.ok_or(ClinicError::NotFound)?;
        self.visit_view(visit)
    }
}
