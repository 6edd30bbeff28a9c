//! Correctness checks for the sort implementations

use super::code::{available_variants, SortFn};
use crate::error::VerifyError;
use crate::utils::VariantInfo;

/// Lengths checked by `verify_variant`
const VERIFY_LENGTHS: [usize; 6] = [0, 1, 2, 3, 10, 257];

/// Check one sort against reverse-ordered and duplicate-heavy inputs
pub fn verify_variant(variant: &VariantInfo<SortFn>) -> Result<(), VerifyError> {
    for &len in &VERIFY_LENGTHS {
        let input: Vec<i32> = (0..len as i32).rev().collect();
        let expected: Vec<i32> = (0..len as i32).collect();
        check(variant, &input, &expected)?;

        let duplicates: Vec<i32> = (0..len as i32).map(|v| (v * 7) % 5 - 2).collect();
        let mut expected = duplicates.clone();
        expected.sort_unstable();
        check(variant, &duplicates, &expected)?;
    }

    Ok(())
}

fn check(variant: &VariantInfo<SortFn>, input: &[i32], expected: &[i32]) -> Result<(), VerifyError> {
    let actual = (variant.function)(input);
    if actual != expected {
        return Err(VerifyError::SortMismatch {
            algorithm: variant.name,
            len: input.len(),
        });
    }
    Ok(())
}

/// Verify every sort implementation
pub fn verify_all() -> Result<(), VerifyError> {
    available_variants().iter().try_for_each(verify_variant)
}

#[cfg(test)]
mod tests {
    use super::super::code::partition;
    use super::*;

    /// Quick sort recurses once per element on reverse input; give it room.
    fn with_large_stack<F: FnOnce() + Send + 'static>(f: F) {
        std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(f)
            .expect("spawn test thread")
            .join()
            .expect("test thread panicked");
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All sorts should produce correct results");
    }

    #[test]
    fn test_reverse_range_sorts_to_range() {
        with_large_stack(|| {
            for variant in available_variants() {
                for n in [0i32, 1, 2, 10, 10_000] {
                    let input: Vec<i32> = (0..n).rev().collect();
                    let expected: Vec<i32> = (0..n).collect();
                    assert_eq!(
                        (variant.function)(&input),
                        expected,
                        "{} failed for n = {}",
                        variant.name,
                        n
                    );
                }
            }
        });
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![5, -3, 9, 0, 0, 12, -7, 1];
        let snapshot = input.clone();
        for variant in available_variants() {
            let sorted = (variant.function)(&input);
            assert_eq!(input, snapshot, "{} mutated its input", variant.name);
            assert_eq!(sorted, vec![-7, -3, 0, 0, 1, 5, 9, 12]);
        }
    }

    #[test]
    fn test_extreme_values() {
        let input = vec![i32::MAX, 0, i32::MIN, -1, i32::MAX];
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&input),
                vec![i32::MIN, -1, 0, i32::MAX, i32::MAX],
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut arr = vec![7, 2, 9, 4, 5];
        let p = partition(&mut arr, 0, 4);
        assert_eq!(p, 2);
        assert_eq!(arr[p], 5);
        assert!(arr[..p].iter().all(|&v| v <= 5));
        assert!(arr[p + 1..].iter().all(|&v| v > 5));
    }

    #[test]
    fn test_partition_reverse_input_pivot_goes_first() {
        let mut arr = vec![4, 3, 2, 1, 0];
        assert_eq!(partition(&mut arr, 0, 4), 0);
        assert_eq!(arr[0], 0);
    }
}
