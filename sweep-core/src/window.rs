//! Sliding windows with incrementally maintained aggregates
//!
//! A window is the half-open index range `[left, right)` over a borrowed
//! slice. Growing it at the right edge or shrinking it at the left edge
//! updates the aggregate in O(1), so a full scan costs O(n) no matter how wide
//! the window gets. Nothing here ever re-sums the window contents.

use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

/// Window over integers carrying the running sum of its elements
#[derive(Debug, Clone)]
pub struct SumWindow<'a> {
    seq: &'a [i32],
    left: usize,
    right: usize,
    sum: i64,
}

impl<'a> SumWindow<'a> {
    /// Create an empty window at the start of `seq`
    pub fn new(seq: &'a [i32]) -> Self {
        Self {
            seq,
            left: 0,
            right: 0,
            sum: 0,
        }
    }

    /// Pull the next element in at the right edge
    ///
    /// Returns `false` once the right edge has reached the end of the slice.
    pub fn extend(&mut self) -> bool {
        match self.seq.get(self.right) {
            Some(&value) => {
                self.sum += i64::from(value);
                self.right += 1;
                true
            }
            None => false,
        }
    }

    /// Drop the element at the left edge
    ///
    /// Returns `false` when the window is already empty.
    pub fn shrink(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.sum -= i64::from(self.seq[self.left]);
        self.left += 1;
        true
    }

    /// Move both edges one step right, keeping the width
    pub fn slide(&mut self) -> bool {
        if !self.extend() {
            return false;
        }
        self.shrink()
    }

    /// Sum of the elements currently inside the window
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Number of elements inside the window
    pub fn len(&self) -> usize {
        self.right - self.left
    }

    /// Whether the window holds no elements
    pub fn is_empty(&self) -> bool {
        self.left == self.right
    }

    /// Covered index range
    pub fn range(&self) -> Range<usize> {
        self.left..self.right
    }

    /// Elements currently inside the window
    pub fn as_slice(&self) -> &'a [i32] {
        &self.seq[self.left..self.right]
    }
}

/// Window carrying an occurrence count per distinct element
///
/// Elements whose count drops to zero are removed, so [`distinct`](Self::distinct)
/// is always exact.
#[derive(Debug, Clone)]
pub struct FrequencyWindow<'a, T> {
    seq: &'a [T],
    left: usize,
    right: usize,
    counts: HashMap<T, usize>,
}

impl<'a, T: Eq + Hash + Copy> FrequencyWindow<'a, T> {
    /// Create an empty window at the start of `seq`
    pub fn new(seq: &'a [T]) -> Self {
        Self {
            seq,
            left: 0,
            right: 0,
            counts: HashMap::new(),
        }
    }

    /// Pull the next element in at the right edge
    pub fn extend(&mut self) -> bool {
        match self.seq.get(self.right) {
            Some(&item) => {
                *self.counts.entry(item).or_insert(0) += 1;
                self.right += 1;
                true
            }
            None => false,
        }
    }

    /// Drop the element at the left edge
    pub fn shrink(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let item = self.seq[self.left];
        if let Some(count) = self.counts.get_mut(&item) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&item);
            }
        }
        self.left += 1;
        true
    }

    /// Number of distinct elements inside the window
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of `item` inside the window
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of elements inside the window
    pub fn len(&self) -> usize {
        self.right - self.left
    }

    /// Whether the window holds no elements
    pub fn is_empty(&self) -> bool {
        self.left == self.right
    }

    /// Covered index range
    pub fn range(&self) -> Range<usize> {
        self.left..self.right
    }
}

/// Largest sum of any `width` consecutive elements
///
/// Requires `0 < width <= seq.len()`.
pub fn fixed_window_max_sum(seq: &[i32], width: usize) -> Result<i64> {
    if width == 0 || width > seq.len() {
        return Err(CoreError::InvalidWindow {
            width,
            len: seq.len(),
        });
    }

    let mut window = SumWindow::new(seq);
    while window.len() < width && window.extend() {}

    let mut best = window.sum();
    while window.slide() {
        best = best.max(window.sum());
    }

    Ok(best)
}

/// Length of the shortest run whose sum reaches `threshold`
///
/// Elements must be non-negative, since shrinking relies on the sum never
/// growing when an element leaves. Returns `None` when no run reaches the
/// threshold.
pub fn shortest_subarray_at_least(seq: &[i32], threshold: i64) -> Result<Option<usize>> {
    if let Some(index) = seq.iter().position(|&value| value < 0) {
        return Err(CoreError::NegativeElement { index });
    }

    let mut window = SumWindow::new(seq);
    let mut shortest: Option<usize> = None;

    while window.extend() {
        while !window.is_empty() && window.sum() >= threshold {
            let len = window.len();
            shortest = Some(shortest.map_or(len, |best| best.min(len)));
            window.shrink();
        }
    }

    Ok(shortest)
}

/// Length of the longest run whose sum is exactly `target_sum`
///
/// The window shrinks while its sum exceeds the target, which is only sound
/// when no element is negative. Negative inputs are accepted but the answer
/// is then unspecified.
pub fn longest_subarray_equal_to(seq: &[i32], target_sum: i64) -> usize {
    let mut window = SumWindow::new(seq);
    let mut longest = 0;

    while window.extend() {
        while !window.is_empty() && window.sum() > target_sum {
            window.shrink();
        }
        if !window.is_empty() && window.sum() == target_sum {
            longest = longest.max(window.len());
        }
    }

    longest
}

/// Length of the longest run holding at most `k` distinct elements
pub fn longest_run_at_most_k_distinct<T: Eq + Hash + Copy>(seq: &[T], k: usize) -> usize {
    if k == 0 {
        return 0;
    }

    let mut window = FrequencyWindow::new(seq);
    let mut longest = 0;

    while window.extend() {
        while window.distinct() > k {
            window.shrink();
        }
        longest = longest.max(window.len());
    }

    longest
}

/// Length of the longest substring of `s` with at most `k` distinct characters
pub fn longest_substring_at_most_k_distinct(s: &str, k: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    longest_run_at_most_k_distinct(&chars, k)
}

/// Length of the longest run in which no element repeats
///
/// Tracks the latest index of every element; a repeat at or after `left`
/// moves `left` just past the earlier occurrence.
pub fn longest_run_without_repeat<T: Eq + Hash>(seq: impl IntoIterator<Item = T>) -> usize {
    let mut last_seen: HashMap<T, usize> = HashMap::new();
    let mut left = 0;
    let mut longest = 0;

    for (right, item) in seq.into_iter().enumerate() {
        if let Some(&previous) = last_seen.get(&item) {
            if previous >= left {
                left = previous + 1;
            }
        }
        last_seen.insert(item, right);
        longest = longest.max(right - left + 1);
    }

    longest
}

/// Length of the longest substring of `s` without a repeated character
pub fn longest_substring_no_repeat(s: &str) -> usize {
    longest_run_without_repeat(s.chars())
}
