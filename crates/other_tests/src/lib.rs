//! Multiplication test suite, exported to C as `other_tests_main`

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::panic;

use libtest_mimic::{Arguments, Failed, Trial};
use tracing::debug;

pub fn multiply(left: i32, right: i32) -> i32 {
    left * right
}

pub fn square(value: i32) -> i32 {
    multiply(value, value)
}

/// Run the suite and return `0` if nothing failed, `1` otherwise.
#[unsafe(no_mangle)]
pub extern "C" fn other_tests_main() -> i32 {
    debug!("running tests in {}", module_path!());
    let args = Arguments::from_args();
    let conclusion = libtest_mimic::run(&args, trials());
    debug!(
        passed = conclusion.num_passed,
        failed = conclusion.num_failed,
        ignored = conclusion.num_ignored,
        "suite finished"
    );
    if conclusion.has_failed() { 1 } else { 0 }
}

fn trials() -> Vec<Trial> {
    vec![
        check("multiply::positive", || assert_eq!(multiply(2, 3), 6)),
        check("multiply::zero", || assert_eq!(multiply(0, 10), 0)),
        check("multiply::negative", || assert_eq!(multiply(-2, 3), -6)),
        check("square::of_negative_is_positive", || assert_eq!(square(-4), 16)),
        // Walks the whole non-overflowing range; opt in with --ignored.
        check("square::matches_multiply_exhaustively", || {
            for v in -46_340..=46_340 {
                assert_eq!(square(v), multiply(v, v));
            }
        })
        .with_ignored_flag(true),
    ]
}

fn check(name: &'static str, body: fn()) -> Trial {
    Trial::test(name, move || {
        panic::catch_unwind(body).map_err(|e| {
            let msg = e
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| e.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            Failed::from(format!("Test panicked: {}", msg))
        })
    })
}
