//! # Searching Algorithms
//!
//! Index lookups over `i32` slices returning `Some(index)` or `None`.
//! The benchmark always searches an ascending range, which satisfies binary
//! search's precondition.

pub mod code;
pub mod test;

pub use code::*;

use crate::config::HarnessConfig;
use crate::error::VerifyError;
use crate::fixtures::BenchmarkInputs;
use crate::registry::BenchmarkSubject;
use crate::utils::trial::{run_search_trials, BenchmarkKind, TrialOutcome};
use crate::utils::VariantInfo;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark subject wrapping one search implementation
pub struct SearchRunner {
    variant: VariantInfo<SearchFn>,
}

impl SearchRunner {
    pub fn new(variant: VariantInfo<SearchFn>) -> Self {
        Self { variant }
    }

    /// One runner per search implementation, in report order
    pub fn all() -> Vec<Self> {
        code::available_variants().into_iter().map(Self::new).collect()
    }
}

impl BenchmarkSubject for SearchRunner {
    fn name(&self) -> &'static str {
        self.variant.name
    }

    fn description(&self) -> &'static str {
        self.variant.description
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::Search
    }

    fn run(
        &self,
        inputs: &BenchmarkInputs,
        config: &HarnessConfig,
        seed: Option<u64>,
    ) -> TrialOutcome {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        run_search_trials(
            self.variant.name,
            self.variant.function,
            inputs.search_space(),
            config.search_trials,
            &mut rng,
        )
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_variant(&self.variant)
    }
}
