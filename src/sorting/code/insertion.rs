/// Insertion sort over a private copy of `original`. Stable.
pub fn insertion_sort(original: &[i32]) -> Vec<i32> {
    let mut arr = original.to_vec();

    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;

        // Shift larger elements one slot right until key's position is found
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }

        arr[j] = key;
    }

    arr
}
