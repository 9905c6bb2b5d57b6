mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use wedding_rsvp::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
