//! Trial runner: repeats one algorithm over a fixed input and records
//! whether every trial produced the expected result.
//!
//! Timing is plain wall-clock time over the whole trial loop. The average
//! reported for every outcome divides the total by [`AVERAGE_DIVISOR`]
//! rather than by the benchmark's own trial budget, so sort and search
//! averages share a single scale.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::warn;

/// Divisor applied to total elapsed time for every outcome's average.
pub const AVERAGE_DIVISOR: u32 = 100;

/// Which kind of algorithm a benchmark exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BenchmarkKind {
    Sort,
    Search,
}

impl BenchmarkKind {
    /// Category name used in listings
    pub fn category(self) -> &'static str {
        match self {
            BenchmarkKind::Sort => "sorting",
            BenchmarkKind::Search => "searching",
        }
    }

    fn test_label(self) -> &'static str {
        match self {
            BenchmarkKind::Sort => "SortTest",
            BenchmarkKind::Search => "SearchTest",
        }
    }
}

/// How a benchmark ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Every trial produced the expected result
    Success,
    /// A trial produced a wrong result; see `TrialOutcome::trials`
    Failed,
    /// The algorithm panicked
    Crashed { message: String },
    /// The benchmark did not report before the scheduler's deadline
    TimedOut,
}

impl OutcomeStatus {
    /// Short label for tables and messages
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeStatus::Success => "Success",
            OutcomeStatus::Failed => "Failed",
            OutcomeStatus::Crashed { .. } => "Crashed",
            OutcomeStatus::TimedOut => "Timed out",
        }
    }
}

/// Aggregated result of one benchmark.
#[derive(Clone, Debug)]
pub struct TrialOutcome {
    pub name: String,
    pub kind: BenchmarkKind,
    pub status: OutcomeStatus,
    /// Trials completed on success, or zero-based index of the first failing trial
    pub trials: usize,
    pub total: Duration,
    /// `total / AVERAGE_DIVISOR`
    pub average: Duration,
}

impl TrialOutcome {
    pub fn new(
        name: &str,
        kind: BenchmarkKind,
        status: OutcomeStatus,
        trials: usize,
        total: Duration,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            status,
            trials,
            total,
            average: total / AVERAGE_DIVISOR,
        }
    }

    /// Outcome for a benchmark whose algorithm panicked
    pub fn crashed(name: &str, kind: BenchmarkKind, message: String, total: Duration) -> Self {
        Self::new(name, kind, OutcomeStatus::Crashed { message }, 0, total)
    }

    /// Outcome for a benchmark that was still running at the deadline
    pub fn timed_out(name: &str, kind: BenchmarkKind, waited: Duration) -> Self {
        Self::new(name, kind, OutcomeStatus::TimedOut, 0, waited)
    }

    pub fn success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }

    /// One-line summary, e.g. `[SortTest "QuickSort"]: Success`
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} \"{}\"]: {}",
            self.kind.test_label(),
            self.name,
            self.status.label()
        )?;
        if let OutcomeStatus::Crashed { message } = &self.status {
            write!(f, " ({})", message)?;
        }
        Ok(())
    }
}

/// Run `trials` sort trials against `input`, checking each result against
/// `expected`.
///
/// One unchecked warm-up call precedes the loop. It is included in the
/// elapsed time but not in the trial count.
pub fn run_sort_trials<F>(
    name: &str,
    algorithm: F,
    input: &[i32],
    expected: &[i32],
    trials: usize,
) -> TrialOutcome
where
    F: Fn(&[i32]) -> Vec<i32>,
{
    let start = Instant::now();
    black_box(algorithm(black_box(input)));

    let first_failure =
        (0..trials).find(|_| black_box(algorithm(black_box(input))).as_slice() != expected);

    let total = start.elapsed();
    finish(name, BenchmarkKind::Sort, first_failure, trials, total)
}

/// Run `trials` searches for a single target picked at random from `space`.
///
/// A trial passes when the returned index addresses an element equal to the
/// target. An empty search space has no target and fails at trial 0.
pub fn run_search_trials<F, R>(
    name: &str,
    algorithm: F,
    space: &[i32],
    trials: usize,
    rng: &mut R,
) -> TrialOutcome
where
    F: Fn(&[i32], i32) -> Option<usize>,
    R: Rng + ?Sized,
{
    let start = Instant::now();

    let Some(&target) = space.choose(rng) else {
        warn!(algorithm = name, "search space is empty, no target to look for");
        return TrialOutcome::new(
            name,
            BenchmarkKind::Search,
            OutcomeStatus::Failed,
            0,
            start.elapsed(),
        );
    };

    let located = |index: Option<usize>| index.and_then(|i| space.get(i)) == Some(&target);
    let first_failure =
        (0..trials).find(|_| !located(black_box(algorithm(black_box(space), black_box(target)))));

    let total = start.elapsed();
    finish(name, BenchmarkKind::Search, first_failure, trials, total)
}

fn finish(
    name: &str,
    kind: BenchmarkKind,
    first_failure: Option<usize>,
    trials: usize,
    total: Duration,
) -> TrialOutcome {
    match first_failure {
        Some(index) => TrialOutcome::new(name, kind, OutcomeStatus::Failed, index, total),
        None => TrialOutcome::new(name, kind, OutcomeStatus::Success, trials, total),
    }
}
