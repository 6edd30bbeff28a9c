//! Harness utilities: trial execution, scheduling, reporting and
//! environment queries.

pub mod logging;
pub mod memory;
pub mod runner;
pub mod trial;
pub mod tui;

// Re-export commonly used items
pub use memory::{peak_memory_bytes, peak_memory_mb};
pub use runner::run_benchmarks;
pub use trial::{
    run_search_trials, run_sort_trials, BenchmarkKind, OutcomeStatus, TrialOutcome,
    AVERAGE_DIVISOR,
};

/// Information about one algorithm implementation.
/// Generic over F which is the function signature.
#[derive(Clone, Copy)]
pub struct VariantInfo<F> {
    /// Name shown in the results table (e.g., "QuickSort")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The implementation under test
    pub function: F,
}
