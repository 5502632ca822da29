#![forbid(unsafe_code)]
// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
//! Test-main exit-code aggregation
//!
//! Calls an ordered list of test-main entry points, each a zero-argument
//! function returning a process-style status, and reduces their codes to the
//! largest one. An orchestration tool such as CTest then sees `0` only when
//! every suite reported `0`.
//!
//! ## Modules
//!
//! - `aggregate` - Entry points, the aggregator and the maximum reduction
//! - `status` - The `ExitCode` newtype and platform truncation
//! - `entry` - Maps a run to the status the process exits with
//!
//! ## Panic Policy
//!
//! Library code returns `Result` or `Option`; `.unwrap()` and `.expect()` are
//! denied outside tests. The only `unsafe` in the workspace is the
//! foreign-function declaration in the binary and the `no_mangle` exports of
//! the suite crates.

pub mod aggregate;
pub mod entry;
pub mod status;

pub use aggregate::{AggregateError, Aggregator, EntryPoint, EntryResult, Outcome, max_status};
pub use status::ExitCode;
