use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Appointment, Service};
use crate::services::listing::{
    parse_date_time, AppointmentRow, Column, FormDefaults, COLUMNS, SUCCESS_MESSAGE,
    SUCCESS_TITLE,
};
use crate::services::register::AppointmentRegister;
use crate::state::AppState;

static INDEX_HTML: &str = include_str!("../web/index.html");

// GET /
pub async fn booking_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(INDEX_HTML.replace(
        "{{business_name}}",
        &html_escape(&state.config.business_name),
    ))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// GET /api/services
#[derive(Serialize)]
pub struct ServiceResponse {
    id: Service,
    name: &'static str,
    price: u32,
    label: String,
}

#[derive(Serialize)]
pub struct ServicesResponse {
    default: String,
    services: Vec<ServiceResponse>,
}

pub async fn get_services() -> Json<ServicesResponse> {
    let services = Service::ALL
        .into_iter()
        .map(|s| ServiceResponse {
            id: s,
            name: s.name(),
            price: s.price(),
            label: s.label(),
        })
        .collect();

    Json(ServicesResponse {
        default: Service::default().label(),
        services,
    })
}

// GET /api/columns
pub async fn get_columns() -> Json<[Column; 4]> {
    Json(COLUMNS)
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    id: u64,
    customer_name: String,
    phone_number: String,
    service: String,
    scheduled_at: String,
}

impl From<&Appointment> for AppointmentResponse {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.id,
            customer_name: a.customer_name.clone(),
            phone_number: a.phone_number.clone(),
            service: a.service.label(),
            scheduled_at: a.scheduled_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

// GET /api/appointments
#[derive(Serialize)]
pub struct ListResponse {
    count: usize,
    appointments: Vec<AppointmentResponse>,
    rows: Vec<AppointmentRow>,
}

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse>, AppError> {
    let register = state.register()?;
    let appointments = register.appointments();

    Ok(Json(ListResponse {
        count: appointments.len(),
        appointments: appointments.iter().map(AppointmentResponse::from).collect(),
        rows: appointments.iter().map(AppointmentRow::from).collect(),
    }))
}

// GET /api/appointments/:id
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let register = state.register()?;
    register
        .get(id)
        .map(|a| Json(AppointmentResponse::from(a)))
        .ok_or_else(|| AppError::NotFound(format!("appointment {id}")))
}

// POST /api/appointments
#[derive(Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub service: Option<String>,
    #[serde(default)]
    pub scheduled_at: String,
}

#[derive(Serialize)]
pub struct BookResponse {
    message: &'static str,
    title: &'static str,
    appointment: AppointmentResponse,
    row: AppointmentRow,
    form: FormDefaults,
}

pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let service = body.service.as_deref().and_then(Service::from_label);
    let Some(scheduled_at) = parse_date_time(&body.scheduled_at) else {
        // Earlier fields still take precedence over an unreadable date.
        AppointmentRegister::check_details(&body.customer_name, &body.phone_number, service)
            .inspect_err(|e| tracing::debug!(kind = e.kind(), "appointment rejected"))?;
        return Err(AppError::BadRequest(format!(
            "invalid date and time: {:?}",
            body.scheduled_at
        )));
    };

    let now = Local::now().naive_local();
    let result = {
        let mut register = state.register()?;
        register.submit_at(
            &body.customer_name,
            &body.phone_number,
            service,
            scheduled_at,
            now,
        )
    };

    let appointment =
        result.inspect_err(|e| tracing::debug!(kind = e.kind(), "appointment rejected"))?;

    tracing::info!(
        id = appointment.id,
        service = %appointment.service,
        scheduled_at = %appointment.scheduled_at,
        "appointment booked"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: SUCCESS_MESSAGE,
            title: SUCCESS_TITLE,
            appointment: AppointmentResponse::from(&appointment),
            row: AppointmentRow::from(&appointment),
            form: FormDefaults::at(now),
        }),
    ))
}
