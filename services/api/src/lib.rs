mod cli;
mod infra;
mod routes;
mod server;
mod validate;

use clinic_intake::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
