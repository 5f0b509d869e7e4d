//! Data Transfer Objects for API

use std::fmt;

/// One algorithm invocation with its inputs
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Job {
    /// Converging-pointer pair search over an ascending sequence
    TwoSumSorted {
        /// Ascending values
        values: Vec<i32>,
        /// Pair sum to find
        target: i64,
    },
    /// Complement-lookup pair search over any sequence
    TwoSumUnsorted {
        /// Values in any order
        values: Vec<i32>,
        /// Pair sum to find
        target: i64,
    },
    /// All distinct value triplets with the given sum
    ThreeSum {
        /// Values in any order
        values: Vec<i32>,
        /// Triplet sum to find
        target: i64,
    },
    /// Largest container formed by two walls
    MaxContainerArea {
        /// Wall heights
        heights: Vec<u32>,
    },
    /// Largest sum over a fixed-width window
    FixedWindowMaxSum {
        /// Values to scan
        values: Vec<i32>,
        /// Window width
        width: usize,
    },
    /// Shortest run whose sum reaches a threshold
    ShortestSubarrayAtLeast {
        /// Non-negative values
        values: Vec<i32>,
        /// Sum to reach
        threshold: i64,
    },
    /// Longest run whose sum equals a target
    LongestSubarrayEqualTo {
        /// Values to scan
        values: Vec<i32>,
        /// Exact sum
        target: i64,
    },
    /// Longest substring with at most `k` distinct characters
    LongestSubstringKDistinct {
        /// Text to scan
        text: String,
        /// Maximum distinct characters
        k: usize,
    },
    /// Longest substring without a repeated character
    LongestSubstringNoRepeat {
        /// Text to scan
        text: String,
    },
    /// Stable merge sort
    MergeSort {
        /// Values to sort
        values: Vec<i32>,
        /// Sort largest first
        #[cfg_attr(feature = "serde", serde(default))]
        descending: bool,
    },
    /// Arithmetic expression evaluation
    Evaluate {
        /// Source expression
        expression: String,
    },
    /// Best buy-then-sell gain
    MaxProfit {
        /// Prices in time order
        prices: Vec<i64>,
    },
    /// Largest value below the maximum
    SecondLargest {
        /// Values to scan
        values: Vec<i32>,
    },
}

impl Job {
    /// Operation tag, as written in job files
    pub fn name(&self) -> &'static str {
        match self {
            Job::TwoSumSorted { .. } => "two_sum_sorted",
            Job::TwoSumUnsorted { .. } => "two_sum_unsorted",
            Job::ThreeSum { .. } => "three_sum",
            Job::MaxContainerArea { .. } => "max_container_area",
            Job::FixedWindowMaxSum { .. } => "fixed_window_max_sum",
            Job::ShortestSubarrayAtLeast { .. } => "shortest_subarray_at_least",
            Job::LongestSubarrayEqualTo { .. } => "longest_subarray_equal_to",
            Job::LongestSubstringKDistinct { .. } => "longest_substring_k_distinct",
            Job::LongestSubstringNoRepeat { .. } => "longest_substring_no_repeat",
            Job::MergeSort { .. } => "merge_sort",
            Job::Evaluate { .. } => "evaluate",
            Job::MaxProfit { .. } => "max_profit",
            Job::SecondLargest { .. } => "second_largest",
        }
    }

    /// Every operation tag
    pub const NAMES: [&'static str; 13] = [
        "two_sum_sorted",
        "two_sum_unsorted",
        "three_sum",
        "max_container_area",
        "fixed_window_max_sum",
        "shortest_subarray_at_least",
        "longest_subarray_equal_to",
        "longest_substring_k_distinct",
        "longest_substring_no_repeat",
        "merge_sort",
        "evaluate",
        "max_profit",
        "second_largest",
    ];
}

/// A job with an optional caller-chosen label
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedJob {
    /// Label shown in reports
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// The job itself
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub job: Job,
}

impl NamedJob {
    /// Create an unlabeled job
    pub fn new(job: Job) -> Self {
        Self { name: None, job }
    }

    /// Attach a label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Label if set, operation tag otherwise
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(self.job.name())
    }
}

impl From<Job> for NamedJob {
    fn from(job: Job) -> Self {
        NamedJob::new(job)
    }
}

/// Ordered list of jobs, as stored in a job file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobBatch {
    /// Jobs in execution order
    #[cfg_attr(feature = "serde", serde(default))]
    pub jobs: Vec<NamedJob>,
}

impl JobBatch {
    /// Number of jobs
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the batch holds no jobs
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(feature = "serde")]
impl JobBatch {
    /// Parse a batch from JSON
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result value of a job
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Outcome {
    /// Index pair
    Pair {
        /// Smaller index
        left: usize,
        /// Larger index
        right: usize,
    },
    /// Value triplets
    Triplets(Vec<[i32; 3]>),
    /// Scalar result
    Value(i64),
    /// Run length
    Length(usize),
    /// Reordered sequence
    Sequence(Vec<i32>),
    /// Search found nothing
    NotFound,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pair { left, right } => write!(f, "({left}, {right})"),
            Outcome::Triplets(triplets) if triplets.is_empty() => write!(f, "none"),
            Outcome::Triplets(triplets) => {
                let parts: Vec<String> = triplets
                    .iter()
                    .map(|[a, b, c]| format!("[{a}, {b}, {c}]"))
                    .collect();
                write!(f, "{}", parts.join(" "))
            }
            Outcome::Value(value) => write!(f, "{value}"),
            Outcome::Length(len) => write!(f, "{len}"),
            Outcome::Sequence(values) => {
                let parts: Vec<String> = values.iter().map(i32::to_string).collect();
                write!(f, "{}", parts.join(" "))
            }
            Outcome::NotFound => write!(f, "not found"),
        }
    }
}

/// Completed job with timing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Caller-chosen label, if any
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Operation tag
    pub op: String,
    /// Result value
    pub outcome: Outcome,
    /// Wall-clock time spent in the core, in microseconds
    pub elapsed_micros: u64,
}

impl Report {
    /// Label if set, operation tag otherwise
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.op)
    }
}
