//! Aggregated test-main entry point
//!
//! Runs `some_tests_main` then `other_tests_main` and exits with the larger
//! of their two status codes. No arguments are read.

use std::process;

use ctest_aggregate::{Aggregator, entry};

// Linked only for the test-main symbols they export.
extern crate other_tests;
extern crate some_tests;

unsafe extern "C" {
    safe fn some_tests_main() -> i32;
    safe fn other_tests_main() -> i32;
}

fn main() {
    // Initialize structured logging with env-based filter, defaulting to error
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let aggregator = Aggregator::new()
        .with_entry("some_tests_main", || some_tests_main())
        .with_entry("other_tests_main", || other_tests_main());

    process::exit(entry::run(aggregator).0);
}
