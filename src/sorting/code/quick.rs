use super::partition::partition;

/// Quick sort over a private copy of `original`.
///
/// Uses the last element as pivot without randomisation, so reverse-ordered
/// input degrades to quadratic time and linear recursion depth.
pub fn quick_sort(original: &[i32]) -> Vec<i32> {
    let mut arr = original.to_vec();
    if !arr.is_empty() {
        let high = arr.len() - 1;
        quick_sort_range(&mut arr, 0, high);
    }
    arr
}

fn quick_sort_range(arr: &mut [i32], low: usize, high: usize) {
    if low >= high {
        return;
    }

    let pi = partition(arr, low, high);

    if pi > low {
        quick_sort_range(arr, low, pi - 1);
    }
    quick_sort_range(arr, pi + 1, high);
}
