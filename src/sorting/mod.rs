//! # Sorting Algorithms
//!
//! Textbook comparison sorts over `i32` slices. Each implementation copies
//! its input and sorts the copy, so one input array can be shared by every
//! concurrent benchmark.
//!
//! - **Bubble sort**: quadratic baseline
//! - **Insertion sort**: stable, quadratic
//! - **Quick sort**: Lomuto partition, last-element pivot. Reverse-ordered
//!   input is its worst case and is what the benchmark feeds it.

pub mod code;
pub mod test;

pub use code::*;

use crate::config::HarnessConfig;
use crate::error::VerifyError;
use crate::fixtures::BenchmarkInputs;
use crate::registry::BenchmarkSubject;
use crate::utils::trial::{run_sort_trials, BenchmarkKind, TrialOutcome};
use crate::utils::VariantInfo;

/// Benchmark subject wrapping one sort implementation
pub struct SortRunner {
    variant: VariantInfo<SortFn>,
}

impl SortRunner {
    pub fn new(variant: VariantInfo<SortFn>) -> Self {
        Self { variant }
    }

    /// One runner per sort implementation, in report order
    pub fn all() -> Vec<Self> {
        code::available_variants().into_iter().map(Self::new).collect()
    }
}

impl BenchmarkSubject for SortRunner {
    fn name(&self) -> &'static str {
        self.variant.name
    }

    fn description(&self) -> &'static str {
        self.variant.description
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::Sort
    }

    fn run(
        &self,
        inputs: &BenchmarkInputs,
        config: &HarnessConfig,
        _seed: Option<u64>,
    ) -> TrialOutcome {
        run_sort_trials(
            self.variant.name,
            self.variant.function,
            inputs.sort_input(),
            inputs.sort_expected(),
            config.sort_trials,
        )
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_variant(&self.variant)
    }
}
