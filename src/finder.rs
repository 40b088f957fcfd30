//! Complement-lookup pair finder.
//!
//! A single left-to-right pass records the most recent index of every value
//! seen so far. Each element is paired with the recorded index of its
//! complement (`target - value`), if any.

use std::collections::HashMap;

/// Two indices `[j, i]` into the input, with `j < i`.
pub type Pair = [usize; 2];

/// Find index pairs whose values sum to `target`.
///
/// Pairs are returned in the order their second index is reached. When a value
/// repeats, only its most recent prior occurrence is paired, so `[3, 3, 3]`
/// with target 6 yields `[[0, 1], [1, 2]]` rather than every combination.
pub fn find_pairs(numbers: &[i64], target: i64) -> Vec<Pair> {
    let mut last_seen: HashMap<i64, usize> = HashMap::with_capacity(numbers.len());
    let mut pairs = Vec::new();

    for (i, &value) in numbers.iter().enumerate() {
        // A complement outside the i64 range cannot match any element.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&j) = last_seen.get(&complement) {
                pairs.push([j, i]);
            }
        }
        last_seen.insert(value, i);
    }

    pairs
}
