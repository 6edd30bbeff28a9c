//! Shared helpers for the sort implementations.

/// Lomuto partition of `arr[low..=high]` around the last element.
///
/// Returns the final index of the pivot. Elements less than or equal to the
/// pivot end up on its left.
pub fn partition(arr: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = arr[high];
    let mut store = low;

    for j in low..high {
        if arr[j] <= pivot {
            arr.swap(store, j);
            store += 1;
        }
    }

    arr.swap(store, high);
    store
}
