//! Recursive Aggregation
//!
//! Divide-and-conquer summation of grade sequences.
//!
//! The pairwise split adds values in a different order than a left-to-right
//! fold, so a result may differ from naive summation in its last bit.
//! Nothing in the crate depends on that difference.

/// Sum a sequence by splitting at the midpoint and adding the halves
///
/// Recursion depth is `log2(n)`.
pub fn sum_recursive(values: &[f32]) -> f32 {
    match values {
        [] => 0.0,
        [single] => *single,
        _ => {
            let (left, right) = values.split_at(values.len() / 2);
            sum_recursive(left) + sum_recursive(right)
        }
    }
}

/// Arithmetic mean of `values`, defined as 0 for an empty sequence
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    sum_recursive(values) / values.len() as f32
}
