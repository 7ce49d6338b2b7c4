mod cli;
mod demo;
mod infra;

use aesthetic_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
