use serde::Serialize;

/// Booking-form slot identifiers paired with their display labels.
pub const KNOWN_TIME_SLOTS: [(&str, &str); 3] = [
    ("morning", "Morning (11 AM - 2 PM)"),
    ("evening", "Evening (6 PM - 8 PM)"),
    ("saturday", "Saturday (11 AM - 3:30 PM)"),
];

/// Patient-submitted request for a clinic visit slot.
///
/// Values only come out of [`validate`](super::validator::validate), so every instance already
/// satisfies the field constraints. There are no setters; a stored request never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    name: String,
    phone: String,
    age: String,
    preferred_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl AppointmentRequest {
    pub(crate) fn new(
        name: String,
        phone: String,
        age: String,
        preferred_time: String,
        message: Option<String>,
    ) -> Self {
        Self {
            name,
            phone,
            age,
            preferred_time,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Free text so entries like "6 months" survive.
    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn preferred_time(&self) -> &str {
        &self.preferred_time
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the slot is one the booking form offers. Unknown slots are still accepted.
    pub fn has_known_time_slot(&self) -> bool {
        KNOWN_TIME_SLOTS
            .iter()
            .any(|(slot, _)| *slot == self.preferred_time)
    }

    /// Display label for the slot, or the raw value when the slot is not a known one.
    pub fn preferred_time_label(&self) -> &str {
        KNOWN_TIME_SLOTS
            .iter()
            .find(|(slot, _)| *slot == self.preferred_time)
            .map_or(self.preferred_time.as_str(), |(_, label)| *label)
    }
}
