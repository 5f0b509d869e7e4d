//! Converging-pointer and hash-complement search over integer sequences
//!
//! Every routine here scans its input once. Pointer pairs only ever move
//! toward each other: `left` increases, `right` decreases.

use crate::error::{CoreError, Result};
use std::collections::HashMap;

/// Value triplet returned by [`three_sum`], ascending
pub type Triplet = [i32; 3];

/// Find two indices in an ascending sequence whose values sum to `target`
///
/// Returns the first pair met by the converging sweep, which is not necessarily
/// the lexicographically smallest one. Fails with [`CoreError::Unsorted`] when
/// `seq` is not ascending.
pub fn two_sum_sorted(seq: &[i32], target: i64) -> Result<Option<(usize, usize)>> {
    ensure_sorted(seq)?;
    Ok(converge(seq, target))
}

/// Find two indices whose values sum to `target` in any order
///
/// Remembers the first index each value was seen at and returns
/// `(first index of complement, current index)` for the first element whose
/// complement has already been seen.
pub fn two_sum_unsorted(seq: &[i32], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(seq.len());

    for (index, &value) in seq.iter().enumerate() {
        let value = i64::from(value);
        // Out-of-range complements cannot match any element
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&earlier) = seen.get(&complement) {
                return Some((earlier, index));
            }
        }
        seen.entry(value).or_insert(index);
    }

    None
}

/// All value triplets summing to `target`, without duplicate combinations
///
/// Works on a sorted copy; the caller's slice is left untouched. Triplets come
/// back in ascending order, each one ascending internally.
pub fn three_sum(seq: &[i32], target: i64) -> Vec<Triplet> {
    let mut sorted = seq.to_vec();
    sorted.sort_unstable();

    let mut triplets = Vec::new();
    let len = sorted.len();

    for i in 0..len.saturating_sub(2) {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }

        let anchor = sorted[i];
        let Some(remainder) = target.checked_sub(i64::from(anchor)) else {
            continue;
        };
        let mut left = i + 1;
        let mut right = len - 1;

        while left < right {
            let sum = i64::from(sorted[left]) + i64::from(sorted[right]);
            if sum == remainder {
                triplets.push([anchor, sorted[left], sorted[right]]);

                // Step past every further copy of the matched values
                let (low, high) = (sorted[left], sorted[right]);
                while left < right && sorted[left] == low {
                    left += 1;
                }
                while left < right && sorted[right] == high {
                    right -= 1;
                }
            } else if sum < remainder {
                left += 1;
            } else {
                right -= 1;
            }
        }
    }

    triplets
}

/// Largest `min(h[l], h[r]) * (r - l)` over all index pairs
///
/// The pointer at the shorter wall moves inward: with the width only
/// shrinking, the taller wall can never do better with its current partner.
/// On equal heights the right pointer moves. Sequences shorter than two
/// yield `0`.
pub fn max_container_area(heights: &[u32]) -> u64 {
    if heights.len() < 2 {
        return 0;
    }

    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut best = 0u64;

    while left < right {
        let wall = u64::from(heights[left].min(heights[right]));
        best = best.max(wall * (right - left) as u64);

        if heights[left] < heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }

    best
}

fn converge(seq: &[i32], target: i64) -> Option<(usize, usize)> {
    if seq.len() < 2 {
        return None;
    }

    let mut left = 0;
    let mut right = seq.len() - 1;

    while left < right {
        let sum = i64::from(seq[left]) + i64::from(seq[right]);
        match sum.cmp(&target) {
            std::cmp::Ordering::Equal => return Some((left, right)),
            std::cmp::Ordering::Less => left += 1,
            std::cmp::Ordering::Greater => right -= 1,
        }
    }

    None
}

fn ensure_sorted(seq: &[i32]) -> Result<()> {
    match seq.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(offset) => Err(CoreError::Unsorted { index: offset + 1 }),
        None => Ok(()),
    }
}
