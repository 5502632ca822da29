//! Exit-code aggregation over an ordered list of test-main entry points
//!
//! An [`Aggregator`] holds the entry points its composition root registered,
//! calls each of them exactly once in registration order, and reduces the
//! collected codes to the largest one.
//!
//! Non-zero codes are data, not errors: a failing suite simply contributes a
//! larger value to the maximum. The only error is running with nothing
//! configured, since the maximum of an empty sequence is undefined.

use std::fmt;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::status::ExitCode;

// ============================================================================
// Errors
// ============================================================================

/// Errors that occur while aggregating entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("no test-main entry points configured")]
    NoEntryPoints,
}

// ============================================================================
// Entry points
// ============================================================================

/// A named, zero-argument test-main returning a process-style status code.
pub struct EntryPoint {
    name: String,
    main: Box<dyn FnMut() -> i32>,
}

impl EntryPoint {
    pub fn new(name: impl Into<String>, main: impl FnMut() -> i32 + 'static) -> Self {
        Self {
            name: name.into(),
            main: Box::new(main),
        }
    }

    /// Name used in log output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the test-main once and block until it returns.
    fn invoke(&mut self) -> ExitCode {
        debug!(entry = %self.name, "invoking test-main");
        let start = Instant::now();
        let code = ExitCode((self.main)());
        debug!(
            entry = %self.name,
            code = code.0,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "test-main returned"
        );
        code
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoint").field("name", &self.name).finish_non_exhaustive()
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Code collected from one entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryResult {
    pub name: String,
    pub code: ExitCode,
}

/// Result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// One result per entry point, in invocation order.
    pub results: Vec<EntryResult>,
    /// Maximum of all collected codes.
    pub status: ExitCode,
}

impl Outcome {
    /// The raw result sequence, in invocation order.
    pub fn codes(&self) -> Vec<ExitCode> {
        self.results.iter().map(|r| r.code).collect()
    }

    /// First entry whose code equals the aggregate status.
    pub fn worst(&self) -> Option<&EntryResult> {
        self.results.iter().find(|r| r.code == self.status)
    }

    /// Entries that reported anything other than success.
    pub fn failures(&self) -> impl Iterator<Item = &EntryResult> {
        self.results.iter().filter(|r| !r.code.is_success())
    }
}

// ============================================================================
// Aggregator
// ============================================================================

/// Ordered collection of entry points reduced to a single exit status.
#[derive(Debug, Default)]
pub struct Aggregator {
    entries: Vec<EntryPoint>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry point. Registration order is invocation order.
    pub fn with_entry(mut self, name: impl Into<String>, main: impl FnMut() -> i32 + 'static) -> Self {
        self.push(EntryPoint::new(name, main));
        self
    }

    pub fn push(&mut self, entry: EntryPoint) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the configured entry points, in invocation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(EntryPoint::name)
    }

    /// Invoke every entry point once, in order, and reduce to the maximum code.
    ///
    /// Nothing is invoked when the aggregator is empty.
    pub fn run(&mut self) -> Result<Outcome, AggregateError> {
        if self.entries.is_empty() {
            return Err(AggregateError::NoEntryPoints);
        }

        let mut results = Vec::with_capacity(self.entries.len());
        for entry in &mut self.entries {
            let code = entry.invoke();
            results.push(EntryResult {
                name: entry.name.clone(),
                code,
            });
        }

        let codes: Vec<ExitCode> = results.iter().map(|r| r.code).collect();
        let status = max_status(&codes).ok_or(AggregateError::NoEntryPoints)?;

        let outcome = Outcome { results, status };
        if status.is_success() {
            info!(entries = outcome.results.len(), "all test-mains succeeded");
        } else {
            for failure in outcome.failures() {
                warn!(entry = %failure.name, code = failure.code.0, "test-main reported failure");
            }
            info!(status = status.0, "aggregate status");
        }

        Ok(outcome)
    }
}

/// Largest code in `codes`, by linear scan. `None` only for an empty slice.
pub fn max_status(codes: &[ExitCode]) -> Option<ExitCode> {
    let (first, rest) = codes.split_first()?;
    let mut max = *first;
    for code in rest {
        if *code > max {
            max = *code;
        }
    }
    Some(max)
}

// ============================================================================
// Tests
// ============================================================================
