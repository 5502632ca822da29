//! Process-style status codes
//!
//! `ExitCode` wraps the raw `i32` a test-main returns. Codes are compared as
//! signed integers, so the aggregate of `-1` and `2` is `2`.
//!
//! ## Truncation
//!
//! What a parent process observes is an environment property: on Unix only
//! the low 8 bits of the status survive `exit`, so `-1` is seen as `255` and
//! `256` as `0`. The aggregator never applies that truncation itself; it
//! compares and exits with the full value. [`ExitCode::as_reported`] gives
//! the value an orchestration tool will actually see.

use std::fmt;

/// Exit code returned by a test-main and by the aggregator process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);

    /// Conventionally, only `0` means every test passed.
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// The status as observed by the parent process on this platform.
    #[cfg(unix)]
    pub fn as_reported(self) -> i32 {
        self.0 & 0xff
    }

    /// The status as observed by the parent process on this platform.
    #[cfg(not(unix))]
    pub fn as_reported(self) -> i32 {
        self.0
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
