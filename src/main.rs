// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use clinic_registry::{format_slot, ClinicConfig, Registry};

/// Patient and slot used by the `demo` command
const DEMO_PATIENT: (&str, &str) = ("Ayşe Demir", "12345678901");
const DEMO_DOCTOR: &str = "Ahmet Yılmaz";

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let config = ClinicConfig::from_env()?;

    let (mut registry, report) = config.build_registry()?;
    info!(doctors = report.doctors, slots = report.slots, "Schedule loaded");

    match args.get(1).map(String::as_str) {
        Some("demo") => run_demo(&mut registry)?,
        Some("slots") => {
            let doctor = args.get(2).map(String::as_str).unwrap_or(DEMO_DOCTOR);
            run_slots(&registry, doctor)?;
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage: clinic-registry [demo | slots <doctor>]");
            std::process::exit(2);
        }
        None => run_ui_mode(registry)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_demo(registry: &mut Registry) -> Result<()> {
    let (name, national_id) = DEMO_PATIENT;
    registry.register_patient(name, national_id);

    let first_slot = registry
        .available_slots(DEMO_DOCTOR)?
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("{} has no open slots", DEMO_DOCTOR))?;

    let appointment = registry.book_appointment(national_id, DEMO_DOCTOR, first_slot)?;
    info!(%appointment, "Demo appointment booked");

    println!("--- Active Appointments ---");
    for row in registry.appointment_rows() {
        println!("{}", row);
    }

    Ok(())
}

fn run_slots(registry: &Registry, doctor_name: &str) -> Result<()> {
    let slots = match registry.available_slots(doctor_name) {
        Ok(slots) => slots,
        Err(e) => {
            warn!(doctor = doctor_name, error = %e, "Slot lookup failed");
            return Err(e.into());
        }
    };

    if let Some(doctor) = registry.doctor(doctor_name) {
        println!("{}", doctor);
    }

    if slots.is_empty() {
        println!("No availability");
    }
    for at in slots {
        println!("  {}", format_slot(&at));
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(registry: Registry) -> Result<()> {
    info!(doctors = registry.doctor_count(), "Starting booking form");

    let mut app = ui::App::new(registry);
    ui::run_ui(&mut app)?;

    info!(
        appointments = app.registry.appointment_count(),
        "Booking form closed"
    );

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_registry: Registry) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the API: cargo run --bin clinic-server --features server");
    std::process::exit(1);
}
