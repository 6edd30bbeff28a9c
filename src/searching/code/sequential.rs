/// Linear scan returning the first index holding `x`.
pub fn sequential_search(arr: &[i32], x: i32) -> Option<usize> {
    for (i, &value) in arr.iter().enumerate() {
        if value == x {
            return Some(i);
        }
    }
    None
}
