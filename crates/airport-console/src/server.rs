//! REST backend for the browser front-end.
//!
//! Routes and payloads follow the JSON the console screens already speak.
//! Errors come back as `{"detail": "..."}` with a status code chosen from the
//! error kind.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::console::Console;
use crate::error::{Error, Result};
use crate::flagging::FlagReason;
use crate::models::{wire, CrewRole, Employee, Flight, PassengerStatus};
use crate::reports::{EmployeeStatsReport, FlightTrafficReport, PassengerTrafficReport};
use crate::storage::Storage;

type SharedConsole = Arc<Mutex<Console>>;

/// An error on its way to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::GateUnavailable { .. } | Error::CrewRejected { .. } | Error::Conflict(_) => {
                StatusCode::CONFLICT
            }
            Error::InvalidInput(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("Request failed: {err}");
        }
        // Guard rejections go to the client verbatim; other kinds carry a prefix.
        let detail = match err {
            Error::InvalidInput(message) | Error::Conflict(message) => message,
            other => other.to_string(),
        };
        Self { status, detail }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

type ApiResult = std::result::Result<Json<Value>, ApiError>;

/// Build the router over `console`.
pub fn router(console: Console, request_timeout: Duration) -> Router {
    let state: SharedConsole = Arc::new(Mutex::new(console));

    Router::new()
        .route("/health", get(health))
        .route("/api/flight-schedule", get(list_flights))
        .route("/api/flight-schedule/add", post(add_flight))
        .route("/api/flight-schedule/delete/:flight_no", delete(delete_flight))
        .route("/api/flights-list", get(flight_routes))
        .route("/api/flights", get(flight_numbers))
        .route("/api/employees", get(list_employees))
        .route("/api/employees/add", post(add_employee))
        .route("/api/employees/delete/:employee_id", delete(delete_employee))
        .route("/api/employees/average-salary", get(average_salary))
        .route("/api/crew", get(list_crew))
        .route("/api/crew/add", post(add_crew))
        .route("/api/crew/assign", put(assign_crew))
        .route("/api/crew/delete/:crew_id", delete(delete_crew))
        .route("/api/crew/roster-counts", get(roster_counts))
        .route("/api/crew-employees", get(crew_employees))
        .route("/api/flight/:flight_no/passengers", get(manifest))
        .route("/api/passenger/:passenger_id", delete(delete_passenger))
        .route("/api/passenger/:passenger_id/status", put(update_passenger_status))
        .route("/api/passenger/:passenger_id/resolve", post(resolve_flag))
        .route("/api/ground_operations/data", get(ground_board))
        .route("/api/ground_operations/assign_medical", post(assign_medical))
        .route("/api/ground_operations/assign_engineer", post(assign_engineer))
        .route("/api/reports/flight-traffic", get(flight_traffic))
        .route("/api/reports/employee-stats", get(employee_stats))
        .route("/api/reports/passenger-traffic", get(passenger_traffic))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Open the configured store and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the address cannot be bound.
pub async fn serve(config: &Config) -> Result<()> {
    let storage = Storage::open(config.database_path())?;
    let console = Console::new(storage, config.console.default_airport_id.clone());
    let app = router(console, config.request_timeout());

    let addr = config.server.addr;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::ServerBind { addr, source })?;
    info!("Serving airport console API on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

// === Request bodies ===

#[derive(Debug, Deserialize)]
struct AssignCrewRequest {
    #[serde(rename = "Crew_ID", alias = "crew_id", default, with = "wire::lenient_int_opt")]
    crew_id: Option<i64>,
    #[serde(rename = "Flight_no", alias = "flight_no", default, with = "wire::optional")]
    flight_no: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AddCrewRequest {
    #[serde(rename = "Crew_ID", with = "wire::lenient_int")]
    crew_id: i64,
    #[serde(rename = "Employee_ID", with = "wire::lenient_int")]
    employee_id: i64,
    #[serde(rename = "Crew_role")]
    crew_role: CrewRole,
}

#[derive(Debug, Deserialize)]
struct StatusRequest {
    status: PassengerStatus,
}

#[derive(Debug, Deserialize)]
struct MedicalRequest {
    #[serde(
        rename = "Passenger_ID",
        alias = "passenger_id",
        default,
        with = "wire::lenient_int_opt"
    )]
    passenger_id: Option<i64>,
    #[serde(rename = "Employee_ID", alias = "staff_id", default, with = "wire::lenient_int_opt")]
    staff_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct EngineerRequest {
    #[serde(rename = "Flight_no", alias = "flight_no", default, with = "wire::optional")]
    flight_no: Option<String>,
    #[serde(
        rename = "Employee_ID",
        alias = "engineer_id",
        default,
        with = "wire::lenient_int_opt"
    )]
    engineer_id: Option<i64>,
}

// === Handlers ===

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn list_flights(State(console): State<SharedConsole>) -> ApiResult {
    let flights = console.lock().await.flights()?;
    Ok(Json(json!({ "flights": flights })))
}

async fn add_flight(
    State(console): State<SharedConsole>,
    payload: std::result::Result<Json<Flight>, JsonRejection>,
) -> ApiResult {
    let Json(flight) = payload?;
    let flight_no = flight.flight_no.trim().to_string();
    console.lock().await.add_flight(flight)?;
    Ok(Json(json!({
        "message": "Flight added successfully",
        "flight_no": flight_no,
    })))
}

async fn delete_flight(
    State(console): State<SharedConsole>,
    Path(flight_no): Path<String>,
) -> ApiResult {
    console.lock().await.delete_flight(&flight_no)?;
    Ok(Json(json!({
        "message": "Flight deleted successfully",
        "flight_no": flight_no,
    })))
}

async fn flight_routes(State(console): State<SharedConsole>) -> ApiResult {
    let flights = console.lock().await.flight_routes()?;
    Ok(Json(json!({ "flights": flights })))
}

async fn flight_numbers(State(console): State<SharedConsole>) -> ApiResult {
    let flights = console.lock().await.flight_numbers()?;
    Ok(Json(json!({ "flights": flights })))
}

async fn list_employees(State(console): State<SharedConsole>) -> ApiResult {
    let employees = console.lock().await.employees()?;
    Ok(Json(json!({ "employees": employees })))
}

async fn add_employee(
    State(console): State<SharedConsole>,
    payload: std::result::Result<Json<Employee>, JsonRejection>,
) -> ApiResult {
    let Json(employee) = payload?;
    let employee_id = employee.employee_id;
    console.lock().await.add_employee(employee)?;
    Ok(Json(json!({
        "message": "Employee added successfully",
        "employee_id": employee_id,
    })))
}

async fn delete_employee(
    State(console): State<SharedConsole>,
    Path(employee_id): Path<i64>,
) -> ApiResult {
    console.lock().await.delete_employee(employee_id)?;
    Ok(Json(json!({
        "message": "Employee deleted successfully",
        "employee_id": employee_id,
    })))
}

async fn average_salary(State(console): State<SharedConsole>) -> ApiResult {
    let average = console.lock().await.average_salary()?;
    Ok(Json(json!({ "average_salary": average })))
}

async fn list_crew(State(console): State<SharedConsole>) -> ApiResult {
    let crew = console.lock().await.crew()?;
    Ok(Json(json!({ "crew": crew })))
}

async fn add_crew(
    State(console): State<SharedConsole>,
    payload: std::result::Result<Json<AddCrewRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    console
        .lock()
        .await
        .add_crew_member(request.crew_id, request.employee_id, request.crew_role)?;
    Ok(Json(json!({
        "message": "Crew member added successfully",
        "crew_id": request.crew_id,
    })))
}

async fn assign_crew(
    State(console): State<SharedConsole>,
    payload: std::result::Result<Json<AssignCrewRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    let (Some(crew_id), Some(flight_no)) = (request.crew_id, request.flight_no) else {
        return Err(ApiError::bad_request("Crew_ID and Flight_no are required"));
    };
    console.lock().await.assign_crew(crew_id, &flight_no)?;
    Ok(Json(json!({
        "message": "Crew member assigned successfully",
        "crew_id": crew_id,
        "flight_no": flight_no,
    })))
}

async fn delete_crew(State(console): State<SharedConsole>, Path(crew_id): Path<i64>) -> ApiResult {
    console.lock().await.delete_crew(crew_id)?;
    Ok(Json(json!({
        "message": "Crew member deleted successfully",
        "crew_id": crew_id,
    })))
}

async fn roster_counts(State(console): State<SharedConsole>) -> ApiResult {
    let counts = console.lock().await.roster_counts()?;
    Ok(Json(json!({ "flights": counts })))
}

async fn crew_employees(State(console): State<SharedConsole>) -> ApiResult {
    let employees = console.lock().await.crew_eligible()?;
    Ok(Json(json!({ "employees": employees })))
}

async fn manifest(State(console): State<SharedConsole>, Path(flight_no): Path<String>) -> ApiResult {
    let passengers = console.lock().await.manifest(&flight_no)?;
    Ok(Json(json!({ "passengers": passengers })))
}

async fn delete_passenger(
    State(console): State<SharedConsole>,
    Path(passenger_id): Path<i64>,
) -> ApiResult {
    console.lock().await.delete_passenger(passenger_id)?;
    Ok(Json(json!({ "message": "Deleted" })))
}

async fn update_passenger_status(
    State(console): State<SharedConsole>,
    Path(passenger_id): Path<i64>,
    payload: std::result::Result<Json<StatusRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    console
        .lock()
        .await
        .update_passenger_status(passenger_id, &request.status)?;
    Ok(Json(json!({ "message": "Updated" })))
}

async fn resolve_flag(
    State(console): State<SharedConsole>,
    Path(passenger_id): Path<i64>,
    payload: std::result::Result<Json<FlagReason>, JsonRejection>,
) -> ApiResult {
    let Json(reason) = payload?;
    let outcome = console.lock().await.resolve_flag(passenger_id, reason)?;
    Ok(Json(json!({
        "message": "Flag resolved",
        "passenger_id": passenger_id,
        "outcome": outcome,
    })))
}

async fn ground_board(State(console): State<SharedConsole>) -> ApiResult {
    let board = console.lock().await.ground_board()?;
    Ok(Json(serde_json::to_value(board).map_err(Error::from)?))
}

async fn assign_medical(
    State(console): State<SharedConsole>,
    payload: std::result::Result<Json<MedicalRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    let (Some(passenger_id), Some(staff_id)) = (request.passenger_id, request.staff_id) else {
        return Err(ApiError::bad_request("Passenger_ID and Employee_ID are required"));
    };
    console.lock().await.assign_medical(passenger_id, staff_id)?;
    Ok(Json(json!({
        "message": "Medical staff assigned successfully",
        "passenger_id": passenger_id,
        "staff_id": staff_id,
    })))
}

async fn assign_engineer(
    State(console): State<SharedConsole>,
    payload: std::result::Result<Json<EngineerRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    let (Some(flight_no), Some(engineer_id)) = (request.flight_no, request.engineer_id) else {
        return Err(ApiError::bad_request("Flight_no and Employee_ID are required"));
    };
    console.lock().await.assign_engineer(&flight_no, engineer_id)?;
    Ok(Json(json!({
        "message": "Ground engineer assigned successfully",
        "flight_no": flight_no,
        "engineer_id": engineer_id,
    })))
}

// Reports are serialized straight into the body so `top_routes` keeps its order.
async fn flight_traffic(
    State(console): State<SharedConsole>,
) -> std::result::Result<Json<FlightTrafficReport>, ApiError> {
    Ok(Json(console.lock().await.flight_traffic()?))
}

async fn employee_stats(
    State(console): State<SharedConsole>,
) -> std::result::Result<Json<EmployeeStatsReport>, ApiError> {
    Ok(Json(console.lock().await.employee_stats()?))
}

async fn passenger_traffic(
    State(console): State<SharedConsole>,
) -> std::result::Result<Json<PassengerTrafficReport>, ApiError> {
    Ok(Json(console.lock().await.passenger_traffic()?))
}
