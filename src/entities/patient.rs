// 🧑 Patient Entity - National ID + booking history
//
// The national ID is the identity and never changes. `history` holds handles
// of the appointments that currently reference this patient, in booking order.

use super::appointment::AppointmentId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    national_id: String,
    name: String,
    history: Vec<AppointmentId>,
}

impl Patient {
    pub(crate) fn new(name: &str, national_id: &str) -> Self {
        Patient {
            national_id: national_id.to_string(),
            name: name.to_string(),
            history: Vec::new(),
        }
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handles of active appointments, oldest booking first
    pub fn history(&self) -> &[AppointmentId] {
        &self.history
    }

    pub(crate) fn add_appointment(&mut self, id: AppointmentId) {
        self.history.push(id);
    }

    pub(crate) fn remove_appointment(&mut self, id: AppointmentId) {
        self.history.retain(|h| *h != id);
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient({}, ID={})", self.name, self.national_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_history_keeps_booking_order() {
        let mut patient = Patient::new("Ayşe Demir", "12345678901");
        let first = AppointmentId::new();
        let second = AppointmentId::new();
        let third = AppointmentId::new();

        patient.add_appointment(first);
        patient.add_appointment(second);
        patient.add_appointment(third);
        patient.remove_appointment(second);

        assert_eq!(patient.history(), &[first, third]);
    }

    #[test]
    fn test_patient_display() {
        let patient = Patient::new("Ayşe Demir", "12345678901");
        assert_eq!(patient.to_string(), "Patient(Ayşe Demir, ID=12345678901)");
    }
}
