use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::debug;

use super::repository::AppointmentStore;
use super::service::{AppointmentIntakeService, IntakeError};
use super::validator::{FieldViolation, BODY_FIELD};
use crate::config::IntakeConfig;

pub const APPOINTMENTS_PATH: &str = "/api/appointments";

const SUBMIT_FAILURE: &str = "Failed to submit appointment";
const LIST_FAILURE: &str = "Failed to load appointments";

/// Router builder exposing the appointment intake endpoint.
///
/// `GET` on the same path is only routed when the listing is enabled in `options`.
pub fn appointment_router<S>(
    service: Arc<AppointmentIntakeService<S>>,
    options: IntakeConfig,
) -> Router
where
    S: AppointmentStore + 'static,
{
    let mut methods = post(submit_handler::<S>);
    if options.expose_listing {
        methods = methods.get(list_handler::<S>);
    }

    Router::new()
        .route(APPOINTMENTS_PATH, methods)
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AppointmentIntakeService<S>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    S: AppointmentStore + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            debug!("appointment payload exceeds the body limit");
            return rejection.into_response();
        }
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "unreadable appointment payload");
            let violations = vec![FieldViolation::new(BODY_FIELD, rejection.body_text())];
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": violations })))
                .into_response();
        }
    };

    match service.submit(&payload) {
        Ok(appointment) => (StatusCode::CREATED, Json(appointment)).into_response(),
        Err(IntakeError::Validation(errors)) => {
            let payload = json!({
                "error": errors,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(IntakeError::Store(_)) => {
            let payload = json!({
                "error": SUBMIT_FAILURE,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<AppointmentIntakeService<S>>>,
) -> Response
where
    S: AppointmentStore + 'static,
{
    match service.appointments() {
        Ok(appointments) => (StatusCode::OK, Json(appointments)).into_response(),
        Err(_) => {
            let payload = json!({
                "error": LIST_FAILURE,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
