use clap::Args;
use clinic_intake::appointments::{validate, AppointmentRequest, ValidationErrors};
use clinic_intake::error::AppError;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON payload to check (reads stdin when omitted)
    pub(crate) path: Option<PathBuf>,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let raw = read_payload(args.path.as_deref())?;
    let payload: Value = serde_json::from_str(&raw)?;

    match validate(&payload) {
        Ok(request) => {
            println!("{}", render_accepted(&request));
            Ok(())
        }
        Err(errors) => {
            println!("{}", render_rejected(&errors));
            Err(errors.into())
        }
    }
}

fn read_payload(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn render_accepted(request: &AppointmentRequest) -> String {
    let mut lines = vec![
        "Appointment request accepted".to_string(),
        format!("- Name: {}", request.name()),
        format!("- Phone: {}", request.phone()),
        format!("- Patient age: {}", request.age()),
        format!("- Preferred time: {}", request.preferred_time_label()),
    ];
    if let Some(message) = request.message() {
        lines.push(format!("- Message: {message}"));
    }
    if !request.has_known_time_slot() {
        lines.push(format!(
            "Note: '{}' is not one of the booking form's time slots",
            request.preferred_time()
        ));
    }
    lines.join("\n")
}

fn render_rejected(errors: &ValidationErrors) -> String {
    let mut lines = vec![format!(
        "Appointment request rejected ({} problem{})",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    )];
    lines.extend(
        errors
            .violations()
            .iter()
            .map(|violation| format!("- {}: {}", violation.field, violation.message)),
    );
    lines.join("\n")
}
