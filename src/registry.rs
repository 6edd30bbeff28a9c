//! Registry of benchmark subjects.
//!
//! The registry fixes both the set of algorithms under test and the order in
//! which their rows appear in the report.

use crate::config::HarnessConfig;
use crate::error::VerifyError;
use crate::fixtures::BenchmarkInputs;
use crate::utils::trial::{BenchmarkKind, TrialOutcome};
use std::sync::Arc;

/// Trait that every benchmark subject implements
pub trait BenchmarkSubject: Send + Sync {
    /// Name shown in the report (e.g., "QuickSort")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    fn kind(&self) -> BenchmarkKind;

    /// Category (e.g., "sorting", "searching")
    fn category(&self) -> &'static str {
        self.kind().category()
    }

    /// Run the full trial loop against the shared inputs.
    /// `seed` drives any random choice the benchmark makes.
    fn run(&self, inputs: &BenchmarkInputs, config: &HarnessConfig, seed: Option<u64>)
        -> TrialOutcome;

    /// Check correctness on small inputs
    fn verify(&self) -> Result<(), VerifyError>;
}

/// Ordered collection of benchmark subjects
pub struct AlgorithmRegistry {
    subjects: Vec<Arc<dyn BenchmarkSubject>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            subjects: Vec::new(),
        }
    }

    /// Register a subject after the ones already present
    pub fn register<S: BenchmarkSubject + 'static>(&mut self, subject: S) {
        self.subjects.push(Arc::new(subject));
    }

    /// All subjects in declaration order
    pub fn all(&self) -> &[Arc<dyn BenchmarkSubject>] {
        &self.subjects
    }

    /// Find subject by name
    pub fn find(&self, name: &str) -> Option<&Arc<dyn BenchmarkSubject>> {
        self.subjects.iter().find(|s| s.name() == name)
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.subjects.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the registry of the five benchmark subjects: sorts first, then searches
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    for runner in crate::sorting::SortRunner::all() {
        registry.register(runner);
    }
    for runner in crate::searching::SearchRunner::all() {
        registry.register(runner);
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let registry = build_registry();
        assert_eq!(
            registry.list_names(),
            vec![
                "BubbleSort",
                "InsertionSort",
                "QuickSort",
                "BinarySearch",
                "SeqSearch"
            ]
        );
    }

    #[test]
    fn test_find_and_categories() {
        let registry = build_registry();
        assert_eq!(registry.len(), 5);

        let quick = registry.find("QuickSort").expect("QuickSort registered");
        assert_eq!(quick.category(), "sorting");

        let seq = registry.find("SeqSearch").expect("SeqSearch registered");
        assert_eq!(seq.kind(), BenchmarkKind::Search);

        assert!(registry.find("MergeSort").is_none());
    }
}
