use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::{json, Value};

use crate::appointments::domain::AppointmentRequest;
use crate::appointments::repository::{AppointmentStore, MemoryAppointmentStore, StoreError};
use crate::appointments::validator::validate;
use crate::appointments::{appointment_router, AppointmentIntakeService};
use crate::config::IntakeConfig;

pub(super) fn valid_payload() -> Value {
    json!({
        "name": "Jo",
        "phone": "9999999999",
        "age": "34",
        "preferredTime": "morning",
    })
}

pub(super) fn payload_with_message() -> Value {
    json!({
        "name": "Meera Kapoor",
        "phone": "+91 90411 62603",
        "age": "6 months",
        "preferredTime": "saturday",
        "message": "Follow-up for vaccination schedule",
    })
}

pub(super) fn invalid_payload() -> Value {
    json!({
        "name": "J",
        "phone": "123",
        "age": "",
        "preferredTime": "",
    })
}

pub(super) fn accepted(payload: &Value) -> AppointmentRequest {
    validate(payload).expect("fixture payload is valid")
}

pub(super) fn build_service() -> (
    AppointmentIntakeService<MemoryAppointmentStore>,
    Arc<MemoryAppointmentStore>,
) {
    let store = Arc::new(MemoryAppointmentStore::new());
    let service = AppointmentIntakeService::new(store.clone());
    (service, store)
}

pub(super) fn router_with_service(
    service: AppointmentIntakeService<MemoryAppointmentStore>,
    expose_listing: bool,
) -> axum::Router {
    appointment_router(Arc::new(service), IntakeConfig { expose_listing })
}

/// Store that counts calls so tests can prove rejected payloads never reach it.
#[derive(Default)]
pub(super) struct CountingStore {
    inner: MemoryAppointmentStore,
    creates: AtomicUsize,
}

impl CountingStore {
    pub(super) fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

impl AppointmentStore for CountingStore {
    fn create(&self, request: AppointmentRequest) -> Result<AppointmentRequest, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(request)
    }

    fn list(&self) -> Result<Vec<AppointmentRequest>, StoreError> {
        self.inner.list()
    }
}

pub(super) struct UnavailableStore;

impl AppointmentStore for UnavailableStore {
    fn create(&self, _request: AppointmentRequest) -> Result<AppointmentRequest, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<AppointmentRequest>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_bad_request(response: &Response) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn violation_fields(payload: &Value) -> Vec<String> {
    payload
        .get("error")
        .and_then(Value::as_array)
        .expect("error list")
        .iter()
        .filter_map(|entry| entry.get("field").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}
