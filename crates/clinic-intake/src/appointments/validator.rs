use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::domain::AppointmentRequest;

/// Field name used when the payload as a whole is unusable.
pub const BODY_FIELD: &str = "body";

/// A single unmet constraint, reported against the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every violation found in one validation pass, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }

    pub(crate) fn single(violation: FieldViolation) -> Self {
        Self(vec![violation])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Constraint attached to one field of the request shape.
///
/// `min_len` counts UTF-16 code units, matching the booking form's client-side check.
struct FieldRule {
    field: &'static str,
    required: bool,
    min_len: usize,
    too_short: &'static str,
}

const NAME: FieldRule = FieldRule {
    field: "name",
    required: true,
    min_len: 2,
    too_short: "Name must be at least 2 characters",
};

const PHONE: FieldRule = FieldRule {
    field: "phone",
    required: true,
    min_len: 10,
    too_short: "Please enter a valid phone number",
};

const AGE: FieldRule = FieldRule {
    field: "age",
    required: true,
    min_len: 1,
    too_short: "Please enter patient age",
};

const PREFERRED_TIME: FieldRule = FieldRule {
    field: "preferredTime",
    required: true,
    min_len: 1,
    too_short: "Please select a preferred time",
};

const MESSAGE: FieldRule = FieldRule {
    field: "message",
    required: false,
    min_len: 0,
    too_short: "",
};

impl FieldRule {
    fn check(&self, object: &Map<String, Value>) -> Result<Option<String>, FieldViolation> {
        match object.get(self.field) {
            None if self.required => Err(FieldViolation::new(self.field, "Required")),
            None => Ok(None),
            Some(Value::String(text)) => {
                if text.encode_utf16().count() < self.min_len {
                    Err(FieldViolation::new(self.field, self.too_short))
                } else {
                    Ok(Some(text.clone()))
                }
            }
            Some(other) => Err(FieldViolation::new(
                self.field,
                format!("Expected string, received {}", kind_of(other)),
            )),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Turn an untyped payload into an [`AppointmentRequest`], or report every unmet constraint.
///
/// Each rule runs regardless of earlier failures. Keys outside the request shape are ignored.
pub fn validate(input: &Value) -> Result<AppointmentRequest, ValidationErrors> {
    let object = match input {
        Value::Object(object) => object,
        other => {
            return Err(ValidationErrors::single(FieldViolation::new(
                BODY_FIELD,
                format!("Expected object, received {}", kind_of(other)),
            )))
        }
    };

    let mut violations = Vec::new();
    let mut check = |rule: &FieldRule| match rule.check(object) {
        Ok(value) => value,
        Err(violation) => {
            violations.push(violation);
            None
        }
    };

    let name = check(&NAME);
    let phone = check(&PHONE);
    let age = check(&AGE);
    let preferred_time = check(&PREFERRED_TIME);
    let message = check(&MESSAGE);

    if !violations.is_empty() {
        return Err(ValidationErrors(violations));
    }

    // Required rules only pass with a value present.
    Ok(AppointmentRequest::new(
        name.unwrap_or_default(),
        phone.unwrap_or_default(),
        age.unwrap_or_default(),
        preferred_time.unwrap_or_default(),
        message,
    ))
}
