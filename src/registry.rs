// 🏥 Registry - Sole owner of patients, doctors and appointments
//
// Every cross-entity mutation goes through here. Booking and cancellation
// validate everything first and only then touch state, so a failed call
// leaves the registry exactly as it was.
//
// The registry is a plain value: construct one per process (or per test) and
// pass it to whatever needs it. Multi-user front ends must wrap it in a single
// lock, since booking is a check-then-act sequence.

use crate::entities::{Appointment, Doctor, Patient};
use crate::slot::format_slot;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Which kind of record a lookup failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Patient,
    Doctor,
    Appointment,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patient",
            EntityKind::Doctor => "doctor",
            EntityKind::Appointment => "appointment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain failures of registry transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Not found: {0}")]
    NotFound(EntityKind),

    #[error("Unavailable: slot not offered")]
    Unavailable,

    #[error("Conflict: slot taken")]
    Conflict,
}

pub type RegistryResult<T> = Result<T, RegistryError>;

// ============================================================================
// REGISTRY
// ============================================================================

#[derive(Debug, Default)]
pub struct Registry {
    /// national ID → patient
    patients: HashMap<String, Patient>,

    /// name → doctor
    doctors: HashMap<String, Doctor>,

    /// Active appointments in booking order
    appointments: Vec<Appointment>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Register a patient, or return the existing one for this ID
    ///
    /// The stored name is never updated by a repeat registration.
    pub fn register_patient(&mut self, name: &str, national_id: &str) -> &Patient {
        self.patients
            .entry(national_id.to_string())
            .or_insert_with(|| Patient::new(name, national_id))
    }

    /// Register a doctor, or return the existing one for this name
    ///
    /// Returned mutably so the caller can seed availability right away.
    pub fn register_doctor(&mut self, name: &str, specialty: &str) -> &mut Doctor {
        self.doctors
            .entry(name.to_string())
            .or_insert_with(|| Doctor::new(name, specialty))
    }

    // ------------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------------

    /// Book `at` with `doctor_name` for the patient with `patient_id`
    ///
    /// Checks run in order and the first failure wins:
    /// unknown patient, unknown doctor, slot not offered, slot taken.
    pub fn book_appointment(
        &mut self,
        patient_id: &str,
        doctor_name: &str,
        at: NaiveDateTime,
    ) -> RegistryResult<Appointment> {
        if !self.patients.contains_key(patient_id) {
            return Err(RegistryError::NotFound(EntityKind::Patient));
        }

        let doctor = self
            .doctors
            .get(doctor_name)
            .ok_or(RegistryError::NotFound(EntityKind::Doctor))?;

        if !doctor.is_available(at) {
            return Err(RegistryError::Unavailable);
        }

        // One pass covers both the doctor and the patient side
        if self
            .appointments
            .iter()
            .any(|a| a.collides_with(patient_id, doctor_name, at))
        {
            return Err(RegistryError::Conflict);
        }

        // All checks passed - apply the four effects together
        let appointment = Appointment::new(patient_id, doctor_name, at);
        self.appointments.push(appointment.clone());

        if let Some(patient) = self.patients.get_mut(patient_id) {
            patient.add_appointment(appointment.id());
        }
        if let Some(doctor) = self.doctors.get_mut(doctor_name) {
            doctor.remove_availability(at);
        }

        Ok(appointment)
    }

    /// Cancel the appointment this patient holds at `at`
    ///
    /// The slot goes back to the doctor's availability. Returns the removed
    /// appointment so callers can show what was cancelled.
    pub fn cancel_appointment(
        &mut self,
        patient_id: &str,
        at: NaiveDateTime,
    ) -> RegistryResult<Appointment> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.patient_id() == patient_id && a.at() == at)
            .ok_or(RegistryError::NotFound(EntityKind::Appointment))?;

        let appointment = self.appointments.remove(index);

        if let Some(doctor) = self.doctors.get_mut(appointment.doctor_name()) {
            doctor.add_availability(at);
        }
        if let Some(patient) = self.patients.get_mut(patient_id) {
            patient.remove_appointment(appointment.id());
        }

        Ok(appointment)
    }

    // ------------------------------------------------------------------------
    // Listing & lookups
    // ------------------------------------------------------------------------

    /// Active appointments, earliest slot first (ties keep booking order)
    pub fn list_appointments(&self) -> Vec<&Appointment> {
        let mut listed: Vec<&Appointment> = self.appointments.iter().collect();
        listed.sort_by_key(|a| a.at());
        listed
    }

    /// Listing rendered as `slot | doctor | patient name`
    pub fn appointment_rows(&self) -> Vec<String> {
        self.list_appointments()
            .into_iter()
            .map(|a| {
                let patient_name = self
                    .patients
                    .get(a.patient_id())
                    .map(|p| p.name())
                    .unwrap_or(a.patient_id());
                format!("{} | {} | {}", format_slot(&a.at()), a.doctor_name(), patient_name)
            })
            .collect()
    }

    pub fn patient(&self, national_id: &str) -> Option<&Patient> {
        self.patients.get(national_id)
    }

    pub fn doctor(&self, name: &str) -> Option<&Doctor> {
        self.doctors.get(name)
    }

    /// Mutable access for seeding availability
    pub fn doctor_mut(&mut self, name: &str) -> Option<&mut Doctor> {
        self.doctors.get_mut(name)
    }

    /// Patients ordered by national ID
    pub fn patients(&self) -> Vec<&Patient> {
        let mut all: Vec<&Patient> = self.patients.values().collect();
        all.sort_by(|a, b| a.national_id().cmp(b.national_id()));
        all
    }

    /// Doctors ordered by name
    pub fn doctors(&self) -> Vec<&Doctor> {
        let mut all: Vec<&Doctor> = self.doctors.values().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    pub fn doctor_names(&self) -> Vec<String> {
        self.doctors().iter().map(|d| d.name().to_string()).collect()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// A doctor's open slots in ascending order
    pub fn available_slots(&self, doctor_name: &str) -> RegistryResult<Vec<NaiveDateTime>> {
        self.doctor(doctor_name)
            .map(Doctor::available_slots)
            .ok_or(RegistryError::NotFound(EntityKind::Doctor))
    }

    /// Resolve a patient's history handles, oldest booking first
    pub fn patient_history(&self, national_id: &str) -> RegistryResult<Vec<&Appointment>> {
        let patient = self
            .patient(national_id)
            .ok_or(RegistryError::NotFound(EntityKind::Patient))?;

        Ok(patient
            .history()
            .iter()
            .filter_map(|id| self.appointments.iter().find(|a| a.id() == *id))
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
