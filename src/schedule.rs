// 🗓️ Schedule Seeding - Demo doctors and CSV schedule files
//
// Seeding only ever goes through `register_doctor` + `add_availability`, the
// same surface any front end uses. Nothing here is part of the booking rules.

use crate::registry::Registry;
use crate::slot::parse_slot;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One offered slot as it appears in a schedule file
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRow {
    pub doctor: String,
    pub specialty: String,
    pub slot: String,
}

/// Summary of what a seeding pass added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub doctors: usize,
    pub slots: usize,
}

// ============================================================================
// DEMO SCHEDULE
// ============================================================================

/// (doctor, specialty, [(y, m, d, h, min)])
type DemoDoctor = (&'static str, &'static str, &'static [(i32, u32, u32, u32, u32)]);

const DEMO_SCHEDULE: &[DemoDoctor] = &[
    (
        "Ahmet Yılmaz",
        "Kardiyoloji",
        &[
            (2025, 5, 1, 10, 0),
            (2025, 5, 1, 11, 0),
            (2025, 5, 3, 10, 0),
            (2025, 5, 3, 11, 0),
            (2025, 5, 4, 10, 0),
            (2025, 5, 5, 10, 0),
            (2025, 5, 6, 10, 0),
        ],
    ),
    (
        "Mehmet Kara",
        "Dermatoloji",
        &[
            (2025, 5, 2, 9, 0),
            (2025, 5, 2, 10, 0),
            (2025, 5, 4, 9, 0),
            (2025, 5, 4, 10, 0),
            (2025, 5, 5, 9, 0),
            (2025, 5, 6, 9, 0),
            (2025, 5, 7, 9, 0),
        ],
    ),
    (
        "Aylin Şahin",
        "Nöroloji",
        &[
            (2025, 5, 1, 14, 0),
            (2025, 5, 3, 14, 0),
            (2025, 5, 3, 15, 0),
            (2025, 5, 4, 14, 0),
            (2025, 5, 5, 14, 0),
            (2025, 5, 6, 14, 0),
        ],
    ),
];

/// Register the three demo doctors with their fixed slots
pub fn seed_demo(registry: &mut Registry) -> SeedReport {
    let mut report = SeedReport::default();

    for (name, specialty, slots) in DEMO_SCHEDULE {
        let doctor = registry.register_doctor(name, specialty);
        report.doctors += 1;

        for &(y, m, d, h, min) in slots.iter() {
            if let Some(at) = demo_slot(y, m, d, h, min) {
                doctor.add_availability(at);
                report.slots += 1;
            }
        }
    }

    report
}

fn demo_slot(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(h, min, 0)
}

// ============================================================================
// CSV SCHEDULES
// ============================================================================

/// Seed from a CSV file with header `doctor,specialty,slot`
pub fn load_schedule_file(registry: &mut Registry, path: &Path) -> Result<SeedReport> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open schedule file {}", path.display()))?;
    load_schedule(registry, file)
}

/// Seed from any CSV reader
///
/// Rows are validated before anything is registered, so a bad file leaves
/// the registry untouched.
pub fn load_schedule<R: Read>(registry: &mut Registry, reader: R) -> Result<SeedReport> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut parsed = Vec::new();
    for (index, result) in rdr.deserialize().enumerate() {
        // Line 1 is the header
        let line = index + 2;
        let row: ScheduleRow =
            result.with_context(|| format!("Failed to read schedule row on line {}", line))?;
        let at = parse_slot(&row.slot)
            .with_context(|| format!("Bad slot on line {}", line))?;
        parsed.push((row, at));
    }

    let mut report = SeedReport::default();
    for (row, at) in parsed {
        if registry.doctor(&row.doctor).is_none() {
            report.doctors += 1;
        }
        registry
            .register_doctor(&row.doctor, &row.specialty)
            .add_availability(at);
        report.slots += 1;
    }

    Ok(report)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_demo() {
        let mut registry = Registry::new();
        let report = seed_demo(&mut registry);

        assert_eq!(report, SeedReport { doctors: 3, slots: 20 });
        assert_eq!(
            registry.doctor_names(),
            vec!["Ahmet Yılmaz", "Aylin Şahin", "Mehmet Kara"]
        );

        let ahmet = registry.doctor("Ahmet Yılmaz").unwrap();
        assert_eq!(ahmet.specialty(), "Kardiyoloji");
        assert_eq!(ahmet.available_count(), 7);
        assert!(ahmet.is_available(parse_slot("2025-05-01 10:00").unwrap()));

        assert_eq!(registry.doctor("Aylin Şahin").unwrap().available_count(), 6);
    }

    #[test]
    fn test_seed_demo_twice_is_stable() {
        let mut registry = Registry::new();
        seed_demo(&mut registry);
        seed_demo(&mut registry);

        assert_eq!(registry.doctor_count(), 3);
        assert_eq!(registry.doctor("Mehmet Kara").unwrap().available_count(), 7);
    }

    #[test]
    fn test_load_schedule() {
        let csv = "doctor,specialty,slot\n\
                   Ahmet,Kardiyoloji,2025-05-01 10:00\n\
                   Ahmet,Kardiyoloji,2025-05-01 11:00\n\
                   Mehmet, Dermatoloji ,2025-05-02 09:00\n";

        let mut registry = Registry::new();
        let report = load_schedule(&mut registry, csv.as_bytes()).unwrap();

        assert_eq!(report, SeedReport { doctors: 2, slots: 3 });
        assert_eq!(registry.doctor("Ahmet").unwrap().available_count(), 2);
        assert_eq!(registry.doctor("Mehmet").unwrap().specialty(), "Dermatoloji");
    }

    #[test]
    fn test_load_schedule_bad_slot_reports_line() {
        let csv = "doctor,specialty,slot\n\
                   Ahmet,Kardiyoloji,2025-05-01 10:00\n\
                   Ahmet,Kardiyoloji,May 1st\n";

        let mut registry = Registry::new();
        let err = load_schedule(&mut registry, csv.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("line 3"));
        // Nothing was registered
        assert_eq!(registry.doctor_count(), 0);
    }

    #[test]
    fn test_load_schedule_missing_file() {
        let mut registry = Registry::new();
        let result = load_schedule_file(&mut registry, Path::new("/nonexistent/schedule.csv"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to open schedule file"));
    }
}
