use crate::server;
use crate::validate::{run_validate, ValidateArgs};
use clap::{Args, Parser, Subcommand};
use clinic_intake::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Clinic Appointment Intake",
    about = "Serve the clinic appointment intake API or check booking payloads offline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate an appointment payload without storing it
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve GET /api/appointments regardless of APP_EXPOSE_APPOINTMENTS
    #[arg(long)]
    pub(crate) expose_appointments: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate(args) => run_validate(args),
    }
}
