use clap::Parser;
use spin_dcd_converter::cli::{self, Args};
use spin_dcd_converter::core::{DefaultErrorReporter, ErrorReporter};
use spin_dcd_converter::logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let _logging = match logging::init(args.debug) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("[WARNING] logging disabled: {:#}", err);
            None
        }
    };

    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            DefaultErrorReporter::new().report_error(&error);
            ExitCode::FAILURE
        }
    }
}
