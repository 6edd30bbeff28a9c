//! # Parallel-Algo-Bench
//!
//! Runs classic sorting and searching algorithms concurrently over large
//! integer arrays, checks every trial's result, and reports timings in an
//! aligned table.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod registry;
pub mod searching;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{CliCommand, HarnessConfig};
    pub use crate::fixtures::BenchmarkInputs;
    pub use crate::registry::{build_registry, AlgorithmRegistry, BenchmarkSubject};
    pub use crate::utils::trial::{BenchmarkKind, OutcomeStatus, TrialOutcome};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        let subjects = registry.all();

        println!("Verifying {} algorithms...", subjects.len());

        for subject in subjects {
            println!("Verifying algorithm: {}", subject.name());
            match subject.verify() {
                Ok(_) => println!("  ✅ Algorithm '{}' passed verification", subject.name()),
                Err(e) => panic!(
                    "  ❌ Algorithm '{}' failed verification: {}",
                    subject.name(),
                    e
                ),
            }
        }
    }
}
