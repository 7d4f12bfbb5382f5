//! Appointment intake: validation of raw booking-form payloads, the append-only store, and the
//! HTTP endpoint that connects them.
//!
//! A request flows `received -> validating -> accepted -> stored` or ends `rejected` with every
//! field violation listed. Store failures surface as a generic server error and leave nothing
//! half-written.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{AppointmentRequest, KNOWN_TIME_SLOTS};
pub use repository::{AppointmentStore, MemoryAppointmentStore, StoreError};
pub use router::{appointment_router, APPOINTMENTS_PATH};
pub use service::{AppointmentIntakeService, IntakeError};
pub use validator::{validate, FieldViolation, ValidationErrors};
