//! Correctness checks for the search implementations

use super::code::{available_variants, SearchFn};
use crate::error::VerifyError;
use crate::utils::VariantInfo;

/// Check one search over an ascending range, including absent values
pub fn verify_variant(variant: &VariantInfo<SearchFn>) -> Result<(), VerifyError> {
    let space: Vec<i32> = (0..100).map(|i| i * 3 - 50).collect();

    let present = space.iter().enumerate().map(|(i, &v)| (v, Some(i)));
    let absent = [i32::MIN, -51, -49, 0, 248, i32::MAX].into_iter().map(|v| (v, None));

    for (target, expected) in present.chain(absent) {
        check(variant, &space, target, expected)?;
    }

    check(variant, &[], 0, None)?;
    check(variant, &[7], 7, Some(0))?;
    check(variant, &[7], 8, None)
}

fn check(
    variant: &VariantInfo<SearchFn>,
    space: &[i32],
    target: i32,
    expected: Option<usize>,
) -> Result<(), VerifyError> {
    let actual = (variant.function)(space, target);
    if actual != expected {
        return Err(VerifyError::SearchMismatch {
            algorithm: variant.name,
            target,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Verify every search implementation
pub fn verify_all() -> Result<(), VerifyError> {
    available_variants().iter().try_for_each(verify_variant)
}

#[cfg(test)]
mod tests {
    use super::super::code::{binary_search, sequential_search};
    use super::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All searches should produce correct results");
    }

    #[test]
    fn test_binary_and_sequential_agree() {
        let space: Vec<i32> = (0..10_000).collect();
        for &value in &space {
            let bin = binary_search(&space, value);
            assert_eq!(bin, sequential_search(&space, value), "value {}", value);
            assert_eq!(bin.map(|i| space[i]), Some(value));
        }
    }

    #[test]
    fn test_outside_range_not_found() {
        let space: Vec<i32> = (10..20).collect();
        for value in [i32::MIN, 0, 9, 20, 1_000, i32::MAX] {
            assert_eq!(binary_search(&space, value), None);
            assert_eq!(sequential_search(&space, value), None);
        }
    }

    #[test]
    fn test_empty_and_single() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[], 1), None, "{}", variant.name);
            assert_eq!((variant.function)(&[1], 1), Some(0), "{}", variant.name);
            assert_eq!((variant.function)(&[1], 2), None, "{}", variant.name);
        }
    }

    #[test]
    fn test_duplicates_return_matching_index() {
        let space = vec![1, 2, 2, 2, 3];
        let bin = binary_search(&space, 2).expect("2 is present");
        assert_eq!(space[bin], 2);
        assert_eq!(sequential_search(&space, 2), Some(1));
    }
}
