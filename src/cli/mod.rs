pub mod args;
pub mod commands;

pub use args::{parse_truthy, Args};

use crate::core::error::AppError;

pub async fn run(args: Args) -> Result<(), AppError> {
    commands::convert(args).await
}
