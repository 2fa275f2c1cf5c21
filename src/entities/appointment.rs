// 📅 Appointment Entity - Immutable link between patient, doctor and slot
//
// Identity: AppointmentId (UUID, generated at booking time)
// Value: (patient_id, doctor_name, at) - fixed once constructed
//
// The patient and doctor are referenced by key, never owned. Only the
// registry constructs appointments.

use crate::slot::{format_slot, serde_slot};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable handle for an appointment inside registry-owned storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(Uuid);

impl AppointmentId {
    pub fn new() -> Self {
        AppointmentId(Uuid::new_v4())
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A booked slot. Fields are private so the triple cannot be edited;
/// rescheduling is cancel + book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,
    patient_id: String,
    doctor_name: String,
    #[serde(with = "serde_slot")]
    at: NaiveDateTime,
}

impl Appointment {
    pub(crate) fn new(patient_id: &str, doctor_name: &str, at: NaiveDateTime) -> Self {
        Appointment {
            id: AppointmentId::new(),
            patient_id: patient_id.to_string(),
            doctor_name: doctor_name.to_string(),
            at,
        }
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    /// National ID of the patient
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn doctor_name(&self) -> &str {
        &self.doctor_name
    }

    pub fn at(&self) -> NaiveDateTime {
        self.at
    }

    /// Same slot for the same patient or the same doctor
    pub fn collides_with(&self, patient_id: &str, doctor_name: &str, at: NaiveDateTime) -> bool {
        self.at == at && (self.patient_id == patient_id || self.doctor_name == doctor_name)
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Dr. {} ↔ {}",
            format_slot(&self.at),
            self.doctor_name,
            self.patient_id
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::parse_slot;

    #[test]
    fn test_appointment_creation() {
        let at = parse_slot("2025-05-01 10:00").unwrap();
        let appt = Appointment::new("12345678901", "Ahmet Yılmaz", at);

        assert_eq!(appt.patient_id(), "12345678901");
        assert_eq!(appt.doctor_name(), "Ahmet Yılmaz");
        assert_eq!(appt.at(), at);
    }

    #[test]
    fn test_appointment_ids_are_unique() {
        let at = parse_slot("2025-05-01 10:00").unwrap();
        let a = Appointment::new("12345678901", "Ahmet Yılmaz", at);
        let b = Appointment::new("12345678901", "Ahmet Yılmaz", at);

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_appointment_id_text_is_a_uuid() {
        let id = AppointmentId::new();
        let parsed = Uuid::parse_str(&id.to_string()).unwrap();

        assert_eq!(AppointmentId(parsed), id);
        assert_eq!(serde_json::to_value(id).unwrap(), id.to_string());
    }

    #[test]
    fn test_collides_with() {
        let at = parse_slot("2025-05-01 10:00").unwrap();
        let other = parse_slot("2025-05-01 11:00").unwrap();
        let appt = Appointment::new("11111111111", "Ahmet Yılmaz", at);

        // Same doctor, same slot
        assert!(appt.collides_with("22222222222", "Ahmet Yılmaz", at));
        // Same patient, same slot, different doctor
        assert!(appt.collides_with("11111111111", "Mehmet Kara", at));
        // Different slot never collides (no duration model)
        assert!(!appt.collides_with("11111111111", "Ahmet Yılmaz", other));
        // Unrelated patient and doctor
        assert!(!appt.collides_with("22222222222", "Mehmet Kara", at));
    }

    #[test]
    fn test_appointment_display() {
        let at = parse_slot("2025-05-01 10:00").unwrap();
        let appt = Appointment::new("12345678901", "Ahmet Yılmaz", at);

        assert_eq!(appt.to_string(), "2025-05-01 10:00 | Dr. Ahmet Yılmaz ↔ 12345678901");
    }

    #[test]
    fn test_appointment_serializes_slot_as_text() {
        let at = parse_slot("2025-05-01 10:00").unwrap();
        let appt = Appointment::new("12345678901", "Ahmet Yılmaz", at);

        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["at"], "2025-05-01 10:00");
        assert_eq!(json["patient_id"], "12345678901");
        assert_eq!(json["id"], appt.id().to_string());

        let back: Appointment = serde_json::from_value(json).unwrap();
        assert_eq!(back, appt);
    }
}
