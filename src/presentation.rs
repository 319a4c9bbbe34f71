// src/presentation.rs
//
// All user-visible output funnels through here. Both the count and the
// error lines go to standard output, matching the tool's long-observed
// behavior; the exit code is the machine-readable failure signal.
use count_vlines_shared_kernel::{InfrastructureError, LineCount, VlinesError};

use crate::args::USAGE_HINT;

pub fn print_count(count: LineCount) {
    println!("{count}");
}

pub fn print_usage_error() {
    println!("Invalid number of arguments.");
    println!("{USAGE_HINT}");
}

pub fn print_error(err: &VlinesError) {
    println!("{}", error_line(err));
}

/// Map an error onto exactly one of the reportable lines. The four kinds
/// are mutually exclusive; anything unclassified falls through to the
/// catch-all so the program never aborts abnormally.
pub fn error_line(err: &VlinesError) -> String {
    use InfrastructureError as Infra;

    match err.root_cause() {
        VlinesError::Infrastructure(infra) => match infra {
            Infra::ImageNotFound { .. } => format!("File Error: {infra}"),
            Infra::ImageAccessDenied { .. } => format!("Access Error: {infra}"),
            Infra::ImageUnsupported { .. } | Infra::ImageRead { .. } => {
                format!("Input/Output Error: {infra}")
            }
        },
        other => format!("Unexpected Error: {other}"),
    }
}
