/// Bubble sort over a private copy of `original`.
pub fn bubble_sort(original: &[i32]) -> Vec<i32> {
    let mut arr = original.to_vec();
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }

    arr
}
