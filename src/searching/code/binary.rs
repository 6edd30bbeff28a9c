use std::cmp::Ordering;

/// Binary search over an ascending slice.
///
/// Returns the index of an element equal to `x`, or `None` once the range
/// is exhausted. Results are unspecified if `arr` is not sorted.
pub fn binary_search(arr: &[i32], x: i32) -> Option<usize> {
    let mut low = 0;
    let mut high = arr.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(&x) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
