// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use count_vlines::args::Args;
use count_vlines::{app, presentation};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            presentation::print_usage_error();
            return ExitCode::FAILURE;
        }
    };

    match app::run(&args.path) {
        Ok(count) => {
            presentation::print_count(count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            presentation::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
