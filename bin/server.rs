// Clinic Registry - Web Server
// REST API with Axum
//
// Environment:
// - CLINIC_SCHEDULE: CSV schedule (default: built-in demo schedule)
// - HOST / PORT: bind address (default: 0.0.0.0:3000)
// - RUST_LOG: log level (default: info)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clinic_registry::{
    format_slot, parse_slot, validate_national_id, Appointment, ClinicConfig, Doctor,
    FormatError, Patient, Registry, RegistryError,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Shared application state
///
/// One lock around the whole registry: booking is check-then-act, so two
/// requests must never interleave inside a transaction.
#[derive(Clone)]
struct AppState {
    registry: Arc<Mutex<Registry>>,
}

impl AppState {
    fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // Transactions validate before they mutate, so a panicked holder
        // cannot have left a half-applied booking behind
        self.registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

enum ApiError {
    Registry(RegistryError),
    Format(FormatError),
    MissingField(&'static str),
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        ApiError::Registry(e)
    }
}

impl From<FormatError> for ApiError {
    fn from(e: FormatError) -> Self {
        ApiError::Format(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Registry(RegistryError::Unavailable) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Registry(RegistryError::Conflict) => StatusCode::CONFLICT,
            ApiError::Format(_) | ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Registry(e) => e.to_string(),
            ApiError::Format(e) => e.to_string(),
            ApiError::MissingField(field) => format!("Missing field: {}", field),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        warn!(status = status.as_u16(), error = %message, "Request rejected");
        (status, Json(ApiResponse::err(message))).into_response()
    }
}

type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}

// ============================================================================
// Request / Response bodies
// ============================================================================

#[derive(Serialize, Deserialize)]
struct DoctorResponse {
    name: String,
    specialty: String,
    available: Vec<String>,
    slots_url: String,
}

impl From<&Doctor> for DoctorResponse {
    fn from(doctor: &Doctor) -> Self {
        Self {
            name: doctor.name().to_string(),
            specialty: doctor.specialty().to_string(),
            available: doctor.available_labels(),
            slots_url: format!("/api/doctors/{}/slots", urlencoding::encode(doctor.name())),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct PatientResponse {
    national_id: String,
    name: String,
    appointments: usize,
}

impl From<&Patient> for PatientResponse {
    fn from(patient: &Patient) -> Self {
        Self {
            national_id: patient.national_id().to_string(),
            name: patient.name().to_string(),
            appointments: patient.history().len(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct AppointmentResponse {
    id: String,
    at: String,
    doctor: String,
    patient_id: String,
}

impl From<&Appointment> for AppointmentResponse {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id().to_string(),
            at: format_slot(&appointment.at()),
            doctor: appointment.doctor_name().to_string(),
            patient_id: appointment.patient_id().to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RegisterPatientRequest {
    name: String,
    national_id: String,
}

#[derive(Deserialize)]
struct BookRequest {
    patient_id: String,
    doctor: String,
    at: String,
}

#[derive(Deserialize)]
struct CancelRequest {
    patient_id: String,
    at: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/doctors - All doctors with their open slots
async fn list_doctors(State(state): State<AppState>) -> ApiResult<Vec<DoctorResponse>> {
    let registry = state.registry();
    let doctors: Vec<DoctorResponse> = registry.doctors().into_iter().map(DoctorResponse::from).collect();
    ok(doctors)
}

/// GET /api/doctors/:name/slots - One doctor's open slots
async fn doctor_slots(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Vec<String>> {
    // axum's Path already percent-decodes the segment
    let registry = state.registry();
    let slots = registry.available_slots(&name)?;
    ok(slots.iter().map(format_slot).collect())
}

/// GET /api/patients - Registered patients
async fn list_patients(State(state): State<AppState>) -> ApiResult<Vec<PatientResponse>> {
    let registry = state.registry();
    let patients: Vec<PatientResponse> = registry.patients().into_iter().map(PatientResponse::from).collect();
    ok(patients)
}

/// POST /api/patients - Register (idempotent by national ID)
async fn register_patient(
    State(state): State<AppState>,
    Json(req): Json<RegisterPatientRequest>,
) -> ApiResult<PatientResponse> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::MissingField("name"));
    }
    let national_id = validate_national_id(&req.national_id)?;

    let mut registry = state.registry();
    let patient = PatientResponse::from(registry.register_patient(name, &national_id));
    ok(patient)
}

/// GET /api/appointments - Active appointments, earliest first
async fn list_appointments(State(state): State<AppState>) -> ApiResult<Vec<AppointmentResponse>> {
    let registry = state.registry();
    let appointments: Vec<AppointmentResponse> = registry
        .list_appointments()
        .into_iter()
        .map(AppointmentResponse::from)
        .collect();
    ok(appointments)
}

/// POST /api/appointments - Booking transaction
async fn book_appointment(
    State(state): State<AppState>,
    Json(req): Json<BookRequest>,
) -> ApiResult<AppointmentResponse> {
    let patient_id = validate_national_id(&req.patient_id)?;
    let at = parse_slot(&req.at)?;

    let appointment = state
        .registry()
        .book_appointment(&patient_id, req.doctor.trim(), at)?;

    info!(%appointment, "Appointment booked");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AppointmentResponse::from(&appointment))),
    ))
}

/// POST /api/appointments/cancel - Cancellation transaction
async fn cancel_appointment(
    State(state): State<AppState>,
    Json(req): Json<CancelRequest>,
) -> ApiResult<AppointmentResponse> {
    let patient_id = validate_national_id(&req.patient_id)?;
    let at = parse_slot(&req.at)?;

    let appointment = state.registry().cancel_appointment(&patient_id, at)?;

    info!(%appointment, "Appointment cancelled");
    ok(AppointmentResponse::from(&appointment))
}

fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/doctors", get(list_doctors))
        .route("/doctors/:name/slots", get(doctor_slots))
        .route("/patients", get(list_patients).post(register_patient))
        .route("/appointments", get(list_appointments).post(book_appointment))
        .route("/appointments/cancel", post(cancel_appointment))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Clinic Registry server");

    let config = ClinicConfig::from_env()?;
    let (registry, report) = config.build_registry()?;
    info!(
        doctors = report.doctors,
        slots = report.slots,
        source = ?config.schedule_file,
        "Schedule loaded"
    );

    let app = create_router(AppState::new(registry));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    info!("API: http://{}/api/appointments", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
