//! Single-pass sequence algorithms
//!
//! Each component is a family of pure functions over an in-memory sequence:
//! - [`two_pointer`]: converging-pointer and hash-complement search
//! - [`window`]: fixed and variable sliding windows with O(1) aggregate updates
//! - [`merge_sort`]: stable top-down merge sort into a new vector
//! - [`expression`]: tokenizer and two-stack evaluator for integer arithmetic
//! - [`scan`]: one-pass extremum scans
//!
//! No function mutates its input, keeps state between calls, or performs I/O.
//! "Not found" is always an explicit `None`; violated preconditions come back
//! as [`CoreError`] and evaluation failures as [`EvalError`].
//!
//! # Example
//!
//! ```rust
//! use sweep_core::{fixed_window_max_sum, two_sum_sorted, merge_sort};
//!
//! assert_eq!(two_sum_sorted(&[1, 3, 5, 7, 9], 8).unwrap(), Some((0, 3)));
//! assert_eq!(fixed_window_max_sum(&[2, 1, 5, 1, 3, 2], 3).unwrap(), 9);
//! assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
//! ```

pub mod error;
pub mod expression;
pub mod merge_sort;
pub mod scan;
pub mod two_pointer;
pub mod window;

pub use error::{CoreError, EvalError, EvalErrorKind, Result};
pub use expression::{eval, eval_with, evaluate, tokenize, tokenize_with, TokenizeMode};
pub use merge_sort::{merge_sort, merge_sort_by, merge_sort_by_key};
pub use scan::{max_profit, second_largest};
pub use two_pointer::{max_container_area, three_sum, two_sum_sorted, two_sum_unsorted, Triplet};
pub use window::{
    fixed_window_max_sum, longest_run_at_most_k_distinct, longest_run_without_repeat,
    longest_subarray_equal_to, longest_substring_at_most_k_distinct, longest_substring_no_repeat,
    shortest_subarray_at_least, FrequencyWindow, SumWindow,
};
