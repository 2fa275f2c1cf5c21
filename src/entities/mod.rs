// Entity Models
//
// Three leaf entities. None of them mutates another; cross-entity changes
// only happen inside `Registry` transactions.
//
// - Patient: national ID + history of appointment handles
// - Doctor: name + set of open slots
// - Appointment: immutable (patient, doctor, slot) triple

pub mod appointment;
pub mod doctor;
pub mod patient;

pub use appointment::{Appointment, AppointmentId};
pub use doctor::Doctor;
pub use patient::Patient;
