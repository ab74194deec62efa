//! Doctor operations: plain CRUD, except deletion which cascades to visits.

use super::{ClinicError, ClinicResult, ClinicService};
use crate::models::{Doctor, DoctorFields};

impl ClinicService {
    pub fn create_doctor(&self, fields: &DoctorFields) -> ClinicResult<Doctor> {
        Ok(self.db.insert_doctor(fields)?)
    }

    pub fn get_doctor(&self, id: i64) -> ClinicResult<Doctor> {
        self.db.get_doctor(id)?.ok_or(ClinicError::NotFound)
    }

    pub fn list_doctors(&self) -> ClinicResult<Vec<Doctor>> {
        Ok(self.db.list_doctors()?)
    }

    pub fn update_doctor(&self, id: i64, fields: &DoctorFields) -> ClinicResult<Doctor> {
        self.db
            .update_doctor(id, fields)?
            .ok_or(ClinicError::NotFound)
    }

    /// Delete a doctor and every visit that references it, as one unit.
    pub fn delete_doctor(&mut self, id: i64) -> ClinicResult<()> {
        if self.db.delete_doctor_cascading(id)? {
            Ok(())
        } else {
            Err(ClinicError::NotFound)
        }
    }
}
