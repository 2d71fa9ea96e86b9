mod cli;
mod infra;
mod routes;
mod server;
mod validate;

use pay_admin::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
