use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::domain::AppointmentRequest;
use super::repository::{AppointmentStore, StoreError};
use super::validator::{validate, ValidationErrors};

/// Service composing the validator with an injected appointment store.
pub struct AppointmentIntakeService<S> {
    store: Arc<S>,
}

impl<S> AppointmentIntakeService<S>
where
    S: AppointmentStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Validate a raw payload and store it when every constraint holds.
    ///
    /// Rejected payloads never reach the store.
    pub fn submit(&self, payload: &Value) -> Result<AppointmentRequest, IntakeError> {
        let request = match validate(payload) {
            Ok(request) => request,
            Err(errors) => {
                debug!(violations = errors.len(), "appointment request rejected");
                return Err(errors.into());
            }
        };

        if !request.has_known_time_slot() {
            warn!(
                preferred_time = request.preferred_time(),
                "appointment names an unrecognized time slot"
            );
        }

        let stored = self.store.create(request).map_err(|err| {
            error!(error = %err, "failed to store appointment request");
            err
        })?;

        info!(
            preferred_time = stored.preferred_time_label(),
            "appointment request stored"
        );
        Ok(stored)
    }

    /// Every stored request in submission order.
    pub fn appointments(&self) -> Result<Vec<AppointmentRequest>, IntakeError> {
        let appointments = self.store.list().map_err(|err| {
            error!(error = %err, "failed to list appointment requests");
            err
        })?;
        Ok(appointments)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("appointment request is invalid: {0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}
