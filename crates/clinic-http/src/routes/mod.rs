//! Route modules, one per resource.

mod doctors;
mod patients;
mod visits;

pub use doctors::doctor_routes;
pub use patients::patient_routes;
pub use visits::visit_routes;
