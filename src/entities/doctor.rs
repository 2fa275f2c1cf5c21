// 🩺 Doctor Entity - Identity + open slots
//
// A slot present in `available` is a slot nobody has booked. The registry
// removes a slot when it books it and puts it back on cancellation.

use crate::slot::{format_slot, serde_slot};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique key in the registry
    name: String,

    /// Specialty label, e.g. "Kardiyoloji"
    specialty: String,

    /// Open slots (unordered; see `available_slots` for display order)
    #[serde(with = "slot_set")]
    available: HashSet<NaiveDateTime>,
}

impl Doctor {
    pub(crate) fn new(name: &str, specialty: &str) -> Self {
        Doctor {
            name: name.to_string(),
            specialty: specialty.to_string(),
            available: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    /// Offer a slot. Offering it twice is a no-op.
    pub fn add_availability(&mut self, at: NaiveDateTime) {
        self.available.insert(at);
    }

    /// Withdraw a slot. Withdrawing an absent slot is a no-op.
    pub fn remove_availability(&mut self, at: NaiveDateTime) {
        self.available.remove(&at);
    }

    pub fn is_available(&self, at: NaiveDateTime) -> bool {
        self.available.contains(&at)
    }

    /// Open slots in ascending order
    pub fn available_slots(&self) -> Vec<NaiveDateTime> {
        let mut slots: Vec<NaiveDateTime> = self.available.iter().copied().collect();
        slots.sort();
        slots
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Open slots rendered for a picker list
    pub fn available_labels(&self) -> Vec<String> {
        self.available_slots().iter().map(format_slot).collect()
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dr. {} ({})", self.name, self.specialty)
    }
}

/// Serialize the slot set as a sorted list of canonical strings
mod slot_set {
    use super::serde_slot;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashSet;

    #[derive(Serialize, Deserialize)]
    struct Slot(#[serde(with = "serde_slot")] NaiveDateTime);

    pub fn serialize<S>(set: &HashSet<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut sorted: Vec<NaiveDateTime> = set.iter().copied().collect();
        sorted.sort();
        let slots: Vec<Slot> = sorted.into_iter().map(Slot).collect();
        slots.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashSet<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let slots = Vec::<Slot>::deserialize(deserializer)?;
        Ok(slots.into_iter().map(|s| s.0).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
