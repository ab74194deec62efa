//! Patient operations: plain CRUD. Deleting a patient never touches the
//! visits that reference it; those references are allowed to dangle.

use super::{ClinicError, ClinicResult, ClinicService};
use crate::models::{Patient, PatientFields};

impl ClinicService {
    pub fn create_patient(&self, fields: &PatientFields) -> ClinicResult<Patient> {
        Ok(self.db.insert_patient(fields)?)
    }

    pub fn get_patient(&self, id: i64) -> ClinicResult<Patient> {
        self.db.get_patient(id)?.ok_or(ClinicError::NotFound)
    }

    pub fn list_patients(&self) -> ClinicResult<Vec<Patient>> {
        Ok(self.db.list_patients()?)
    }

    pub fn update_patient(&self, id: i64, fields: &PatientFields) -> ClinicResult<Patient> {
        self.db
            .update_patient(id, fields)?
            .ok_or(ClinicError::NotFound)
    }

    pub fn delete_patient(&self, id: i64) -> ClinicResult<()> {
        if self.db.delete_patient(id)? {
            Ok(())
        } else {
            Err(ClinicError::NotFound)
        }
    }
}
