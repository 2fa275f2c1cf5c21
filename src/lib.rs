// Clinic Registry - Core Library
// Exposes all modules for use in the TUI, API server, and tests

pub mod entities;
pub mod registry;
pub mod slot;      // Boundary formats: slot text, national IDs
pub mod schedule;  // Demo schedule + CSV schedule files
pub mod config;

// Re-export commonly used types
pub use entities::{Appointment, AppointmentId, Doctor, Patient};
pub use registry::{EntityKind, Registry, RegistryError, RegistryResult};
pub use slot::{
    format_slot, parse_slot, validate_national_id, is_partial_national_id,
    FormatError, SLOT_FORMAT, NATIONAL_ID_LEN,
};
pub use schedule::{load_schedule, load_schedule_file, seed_demo, ScheduleRow, SeedReport};
pub use config::ClinicConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
