mod bubble;
mod insertion;
mod partition;
mod quick;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use partition::partition;
pub use quick::quick_sort;

use crate::utils::VariantInfo;

/// Signature shared by every sort under test
pub type SortFn = fn(&[i32]) -> Vec<i32>;

/// Sort implementations in report order
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    vec![
        VariantInfo {
            name: "BubbleSort",
            description: "Adjacent compare-and-swap passes, quadratic baseline",
            function: bubble_sort,
        },
        VariantInfo {
            name: "InsertionSort",
            description: "Stable shift-and-insert sort",
            function: insertion_sort,
        },
        VariantInfo {
            name: "QuickSort",
            description: "Lomuto partition quick sort with last-element pivot",
            function: quick_sort,
        },
    ]
}
