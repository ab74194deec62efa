//! Domain models for the clinic system.

mod doctor;
mod patient;
mod visit;

pub use doctor::*;
pub use patient::*;
pub use visit::*;
