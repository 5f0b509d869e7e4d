//! Top-down merge sort producing a new sequence
//!
//! The input slice is borrowed, never reordered. Recursion halves the index
//! range until one element is left, then merges sorted halves back together.
//! Ties always take the left half first, which makes the sort stable.

use std::cmp::Ordering;

/// Sort `seq` into a new vector in ascending order
pub fn merge_sort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    merge_sort_by(seq, T::cmp)
}

/// Sort `seq` into a new vector using the total order `cmp`
pub fn merge_sort_by<T, F>(seq: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    split_and_merge(seq, &mut cmp)
}

/// Sort `seq` into a new vector by the key `f` extracts
pub fn merge_sort_by_key<T, K, F>(seq: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(seq, |a, b| f(a).cmp(&f(b)))
}

fn split_and_merge<T, F>(seq: &[T], cmp: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }

    let mid = seq.len() / 2;
    let left = split_and_merge(&seq[..mid], cmp);
    let right = split_and_merge(&seq[mid..], cmp);
    merge(left, right, cmp)
}

/// Merge two sorted runs, preferring `left` on ties
fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_basic() {
        assert_eq!(merge_sort(&[1, 7, 2, 3]), vec![1, 2, 3, 7]);
        assert_eq!(merge_sort(&[5, -1, 5, 0, -9]), vec![-9, -1, 0, 5, 5]);
    }

    #[test]
    fn test_merge_sort_trivial_inputs() {
        let empty: [i32; 0] = [];
        assert!(merge_sort(&empty).is_empty());
        assert_eq!(merge_sort(&[42]), vec![42]);
    }

    #[test]
    fn test_merge_sort_does_not_touch_input() {
        let seq = vec![3, 1, 2];
        let sorted = merge_sort(&seq);
        assert_eq!(seq, vec![3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_sort_by_descending() {
        let sorted = merge_sort_by(&[1, 4, 2, 8], |a, b| b.cmp(a));
        assert_eq!(sorted, vec![8, 4, 2, 1]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let records = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        let sorted = merge_sort_by_key(&records, |&(key, _)| key);
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn test_merge_sort_strings() {
        let words = ["pear", "apple", "fig"];
        assert_eq!(merge_sort(&words), vec!["apple", "fig", "pear"]);
    }
}
