//! Benchmark input arrays.
//!
//! Built once at start-up and shared read-only by every benchmark task
//! (wrap in an `Arc`). Sorts receive a reverse-ordered range and compare
//! against the ascending range; searches scan an ascending range.

use crate::config::HarnessConfig;
use crate::error::ConfigError;

/// Immutable inputs for one harness run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkInputs {
    sort_input: Box<[i32]>,
    sort_expected: Box<[i32]>,
    search_space: Box<[i32]>,
}

impl BenchmarkInputs {
    /// Generate `reverse(0..sort_size)`, `0..sort_size` and `0..search_size`.
    pub fn generate(sort_size: usize, search_size: usize) -> Result<Self, ConfigError> {
        let sort_len = array_len("--sort-size", sort_size)?;
        let search_len = array_len("--search-size", search_size)?;

        let sort_expected: Box<[i32]> = (0..sort_len).collect();
        let sort_input = sort_expected.iter().rev().copied().collect();
        let search_space = (0..search_len).collect();

        Ok(Self {
            sort_input,
            sort_expected,
            search_space,
        })
    }

    pub fn from_config(config: &HarnessConfig) -> Result<Self, ConfigError> {
        Self::generate(config.sort_size, config.search_size)
    }

    /// Build inputs from explicit arrays. `search_space` should be ascending
    /// for binary search to apply.
    pub fn from_parts(sort_input: Vec<i32>, sort_expected: Vec<i32>, search_space: Vec<i32>) -> Self {
        Self {
            sort_input: sort_input.into_boxed_slice(),
            sort_expected: sort_expected.into_boxed_slice(),
            search_space: search_space.into_boxed_slice(),
        }
    }

    pub fn sort_input(&self) -> &[i32] {
        &self.sort_input
    }

    pub fn sort_expected(&self) -> &[i32] {
        &self.sort_expected
    }

    pub fn search_space(&self) -> &[i32] {
        &self.search_space
    }
}

fn array_len(option: &'static str, size: usize) -> Result<i32, ConfigError> {
    i32::try_from(size).map_err(|_| ConfigError::SizeTooLarge {
        option,
        size,
        max: i32::MAX as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shapes() {
        let inputs = BenchmarkInputs::generate(5, 8).unwrap();
        assert_eq!(inputs.sort_input(), &[4, 3, 2, 1, 0]);
        assert_eq!(inputs.sort_expected(), &[0, 1, 2, 3, 4]);
        assert_eq!(inputs.search_space(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_generate_empty() {
        let inputs = BenchmarkInputs::generate(0, 0).unwrap();
        assert!(inputs.sort_input().is_empty());
        assert!(inputs.sort_expected().is_empty());
        assert!(inputs.search_space().is_empty());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_size_too_large() {
        let err = BenchmarkInputs::generate(10, usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SizeTooLarge {
                option: "--search-size",
                ..
            }
        ));
    }

    #[test]
    fn test_from_config_defaults() {
        let config = HarnessConfig {
            sort_size: 3,
            search_size: 4,
            ..HarnessConfig::default()
        };
        let inputs = BenchmarkInputs::from_config(&config).unwrap();
        assert_eq!(inputs.sort_input(), &[2, 1, 0]);
        assert_eq!(inputs.search_space().len(), 4);
    }
}
