mod cli;
mod fields;
mod predict;
mod session;

use loanform::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
