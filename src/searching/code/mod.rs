mod binary;
mod sequential;

pub use binary::binary_search;
pub use sequential::sequential_search;

use crate::utils::VariantInfo;

/// Signature shared by every search under test. `None` means not found.
pub type SearchFn = fn(&[i32], i32) -> Option<usize>;

/// Search implementations in report order
pub fn available_variants() -> Vec<VariantInfo<SearchFn>> {
    vec![
        VariantInfo {
            name: "BinarySearch",
            description: "Midpoint halving over an ascending array",
            function: binary_search,
        },
        VariantInfo {
            name: "SeqSearch",
            description: "Linear scan returning the first match",
            function: sequential_search,
        },
    ]
}
