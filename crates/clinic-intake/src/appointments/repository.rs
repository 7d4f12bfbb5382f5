use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::AppointmentRequest;

/// Storage abstraction so the intake service can run against any backing medium.
///
/// Implementations append in arrival order and never deduplicate: the same request created
/// twice is stored twice.
pub trait AppointmentStore: Send + Sync {
    /// Append a request and hand back the stored value unchanged.
    fn create(&self, request: AppointmentRequest) -> Result<AppointmentRequest, StoreError>;
    /// Owned snapshot of every stored request, oldest first.
    fn list(&self) -> Result<Vec<AppointmentRequest>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("appointment store unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store backed by a mutex-guarded vector.
#[derive(Debug, Default, Clone)]
pub struct MemoryAppointmentStore {
    appointments: Arc<Mutex<Vec<AppointmentRequest>>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<AppointmentRequest>>, StoreError> {
        self.appointments
            .lock()
            .map_err(|_| StoreError::Unavailable("appointment mutex poisoned".to_string()))
    }
}

impl AppointmentStore for MemoryAppointmentStore {
    fn create(&self, request: AppointmentRequest) -> Result<AppointmentRequest, StoreError> {
        let mut guard = self.lock()?;
        guard.push(request.clone());
        Ok(request)
    }

    fn list(&self) -> Result<Vec<AppointmentRequest>, StoreError> {
        let guard = self.lock()?;
        Ok(guard.clone())
    }
}
