//! Process entry helper
//!
//! Turns an aggregation run into the status the process should exit with.
//! Aggregation errors are printed here, once, and mapped to
//! [`ExitCode::FAILURE`]. Only the binary's `main` calls `process::exit`.

use tracing::error;

use crate::aggregate::Aggregator;
use crate::status::ExitCode;

/// Run every configured entry point and return the process status.
pub fn run(mut aggregator: Aggregator) -> ExitCode {
    match aggregator.run() {
        Ok(outcome) => outcome.status,
        Err(e) => {
            error!(error = %e, "aggregation failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
