//! Arithmetic test suite, exported to C as `some_tests_main`
//!
//! The suite runs its checks through `libtest-mimic`, so it accepts the usual
//! libtest arguments (filters, `--list`, `--test-threads`) and prints libtest
//! output. The return value follows the process convention: `0` when every
//! check passed, `1` otherwise.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::any::Any;
use std::panic;

use libtest_mimic::{Arguments, Failed, Trial};
use tracing::debug;

pub fn add(left: u64, right: u64) -> u64 {
    left + right
}

pub fn distance(left: u64, right: u64) -> u64 {
    left.abs_diff(right)
}

// ============================================================================
// Entry point
// ============================================================================

/// Run the suite and return a process-style status.
#[unsafe(no_mangle)]
pub extern "C" fn some_tests_main() -> i32 {
    debug!("running tests in {}", module_path!());
    let args = Arguments::from_args();
    run(&args)
}

fn run(args: &Arguments) -> i32 {
    if libtest_mimic::run(args, trials()).has_failed() { 1 } else { 0 }
}

fn trials() -> Vec<Trial> {
    vec![
        check("add::it_works", add_it_works),
        check("add::handles_zero", add_handles_zero),
        check("add::is_commutative", add_is_commutative),
        check("distance::is_symmetric", distance_is_symmetric),
        check("distance::to_self_is_zero", distance_to_self_is_zero),
    ]
}

/// Wrap a plain check as a trial, turning a panic into a failure.
fn check(name: &'static str, body: fn()) -> Trial {
    Trial::test(name, move || panic::catch_unwind(body).map_err(|e| Failed::from(panic_message(e.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "test panicked with a non-string payload".to_string()
    }
}

// ============================================================================
// Checks
// ============================================================================

fn add_it_works() {
    assert_eq!(add(2, 2), 4);
}

fn add_handles_zero() {
    assert_eq!(add(0, 0), 0);
    assert_eq!(add(0, 9), 9);
}

fn add_is_commutative() {
    for (a, b) in [(1, 2), (10, 0), (7, 7)] {
        assert_eq!(add(a, b), add(b, a));
    }
}

fn distance_is_symmetric() {
    assert_eq!(distance(3, 10), 7);
    assert_eq!(distance(10, 3), 7);
}

fn distance_to_self_is_zero() {
    assert_eq!(distance(42, 42), 0);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quiet_args() -> Arguments {
        Arguments {
            quiet: true,
            test_threads: Some(1),
            ..Arguments::default()
        }
    }

    #[test]
    fn test_suite_passes() {
        assert_eq!(run(&quiet_args()), 0);
    }

    #[test]
    fn test_trial_names_are_unique() {
        let names: Vec<String> = trials().iter().map(|t| t.name().to_string()).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_panicking_check_fails_trial() {
        let conclusion = libtest_mimic::run(&quiet_args(), vec![check("boom", || panic!("boom"))]);
        assert!(conclusion.has_failed());
        assert_eq!(conclusion.num_failed, 1);
    }

    #[test]
    fn test_panic_message_payloads() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&5_u8), "test panicked with a non-string payload");
    }
}
