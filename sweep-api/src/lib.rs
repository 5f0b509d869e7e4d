//! Public job API for sweep sequence algorithms
//!
//! This crate wraps the pure functions of `sweep-core` in serializable
//! [`Job`] requests and [`Report`] responses, so callers such as the CLI can
//! load work from files and print results without touching core types.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::time::Instant;
use sweep_core::{
    eval, eval_with, fixed_window_max_sum, longest_subarray_equal_to,
    longest_substring_at_most_k_distinct, longest_substring_no_repeat, max_container_area,
    max_profit, merge_sort, merge_sort_by, second_largest, shortest_subarray_at_least, three_sum,
    two_sum_sorted, two_sum_unsorted,
};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Job, JobBatch, NamedJob, Outcome, Report};
pub use error::{ApiError, JobFailure, Result};
pub use sweep_core::TokenizeMode;

/// Runs jobs against the core algorithms under one [`Config`]
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: Config,
}

impl Processor {
    /// Create a processor with the default (lenient) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one job
    pub fn run(&self, job: &Job) -> Result<Report> {
        self.run_labeled(None, job)
    }

    /// Run one job, carrying its label into the report
    pub fn run_named(&self, named: &NamedJob) -> Result<Report> {
        self.run_labeled(named.name.clone(), &named.job)
    }

    /// Run every job of a batch in order
    ///
    /// With `stop_on_error` set, the returned list ends at the first failure.
    pub fn run_batch(&self, batch: &JobBatch) -> Vec<std::result::Result<Report, JobFailure>> {
        log::info!("running batch of {} job(s)", batch.len());

        let mut results = Vec::with_capacity(batch.len());
        for named in &batch.jobs {
            match self.run_named(named) {
                Ok(report) => results.push(Ok(report)),
                Err(source) => {
                    log::warn!("job '{}' failed: {}", named.label(), source);
                    results.push(Err(JobFailure {
                        label: named.label().to_string(),
                        source,
                    }));
                    if self.config.stop_on_error {
                        log::info!("stopping batch after first failure");
                        break;
                    }
                }
            }
        }

        results
    }

    fn run_labeled(&self, name: Option<String>, job: &Job) -> Result<Report> {
        log::debug!("dispatching {} job", job.name());

        let start = Instant::now();
        let outcome = self.dispatch(job)?;
        let elapsed = start.elapsed();

        log::trace!("{} finished in {:?}: {}", job.name(), elapsed, outcome);

        Ok(Report {
            name,
            op: job.name().to_string(),
            outcome,
            elapsed_micros: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        })
    }

    fn dispatch(&self, job: &Job) -> Result<Outcome> {
        let outcome = match job {
            Job::TwoSumSorted { values, target } => {
                pair_outcome(two_sum_sorted(values, *target)?)
            }
            Job::TwoSumUnsorted { values, target } => {
                pair_outcome(two_sum_unsorted(values, *target))
            }
            Job::ThreeSum { values, target } => {
                Outcome::Triplets(three_sum(values, *target))
            }
            Job::MaxContainerArea { heights } => {
                let area = max_container_area(heights);
                Outcome::Value(i64::try_from(area).map_err(|_| {
                    ApiError::InvalidJob(format!("container area {area} exceeds i64"))
                })?)
            }
            Job::FixedWindowMaxSum { values, width } => {
                Outcome::Value(fixed_window_max_sum(values, *width)?)
            }
            Job::ShortestSubarrayAtLeast { values, threshold } => {
                match shortest_subarray_at_least(values, *threshold)? {
                    Some(len) => Outcome::Length(len),
                    None => Outcome::NotFound,
                }
            }
            Job::LongestSubarrayEqualTo { values, target } => {
                Outcome::Length(longest_subarray_equal_to(values, *target))
            }
            Job::LongestSubstringKDistinct { text, k } => {
                Outcome::Length(longest_substring_at_most_k_distinct(text, *k))
            }
            Job::LongestSubstringNoRepeat { text } => {
                Outcome::Length(longest_substring_no_repeat(text))
            }
            Job::MergeSort { values, descending } => {
                let sorted = if *descending {
                    merge_sort_by(values, |a, b| b.cmp(a))
                } else {
                    merge_sort(values)
                };
                Outcome::Sequence(sorted)
            }
            Job::Evaluate { expression } => {
                Outcome::Value(eval_with(expression, self.config.tokenize_mode)?)
            }
            Job::MaxProfit { prices } => Outcome::Value(max_profit(prices)),
            Job::SecondLargest { values } => match second_largest(values) {
                Some(value) => Outcome::Value(i64::from(value)),
                None => Outcome::NotFound,
            },
        };

        Ok(outcome)
    }
}

fn pair_outcome(pair: Option<(usize, usize)>) -> Outcome {
    match pair {
        Some((left, right)) => Outcome::Pair { left, right },
        None => Outcome::NotFound,
    }
}

// Convenience functions

/// Run one job with default configuration
pub fn run_job(job: &Job) -> Result<Report> {
    Processor::new().run(job)
}

/// Evaluate an expression with default configuration
pub fn evaluate_expression(expression: &str) -> Result<i64> {
    Ok(eval(expression)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_core::{EvalError, TokenizeMode};

    #[test]
    fn test_run_reports_op_and_outcome() {
        let report = run_job(&Job::TwoSumSorted {
            values: vec![1, 3, 5, 7, 9],
            target: 8,
        })
        .unwrap();
        assert_eq!(report.op, "two_sum_sorted");
        assert_eq!(report.outcome, Outcome::Pair { left: 0, right: 3 });
        assert_eq!(report.label(), "two_sum_sorted");
    }

    #[test]
    fn test_not_found_is_explicit() {
        let report = run_job(&Job::TwoSumUnsorted {
            values: vec![1, 2],
            target: 10,
        })
        .unwrap();
        assert_eq!(report.outcome, Outcome::NotFound);

        let report = run_job(&Job::ShortestSubarrayAtLeast {
            values: vec![1, 1],
            threshold: 5,
        })
        .unwrap();
        assert_eq!(report.outcome, Outcome::NotFound);
    }

    #[test]
    fn test_core_errors_propagate() {
        let err = run_job(&Job::FixedWindowMaxSum {
            values: vec![1],
            width: 2,
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::Core(_)));

        let err = run_job(&Job::Evaluate {
            expression: "10/0".to_string(),
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Eval(EvalError::DivisionByZero { position: 2 })
        ));
    }

    #[test]
    fn test_tokenize_mode_follows_config() {
        let job = Job::Evaluate {
            expression: "1 + x2".to_string(),
        };
        assert_eq!(
            Processor::new().run(&job).unwrap().outcome,
            Outcome::Value(3)
        );

        let strict = Processor::with_config(
            Config::builder()
                .tokenize_mode(TokenizeMode::Strict)
                .build()
                .unwrap(),
        );
        assert!(strict.run(&job).is_err());
    }

    #[test]
    fn test_merge_sort_descending() {
        let report = run_job(&Job::MergeSort {
            values: vec![2, 9, 4],
            descending: true,
        })
        .unwrap();
        assert_eq!(report.outcome, Outcome::Sequence(vec![9, 4, 2]));
    }

    #[test]
    fn test_batch_continues_or_stops() {
        let batch = JobBatch {
            jobs: vec![
                NamedJob::new(Job::Evaluate {
                    expression: "(1".to_string(),
                })
                .with_name("broken"),
                NamedJob::new(Job::MaxProfit {
                    prices: vec![3, 1, 4],
                }),
            ],
        };

        let results = Processor::new().run_batch(&batch);
        assert_eq!(results.len(), 2);
        let failure = results[0].as_ref().unwrap_err();
        assert_eq!(failure.label, "broken");
        assert_eq!(results[1].as_ref().unwrap().outcome, Outcome::Value(3));

        let stopping = Processor::with_config(Config::builder().stop_on_error(true).build().unwrap());
        assert_eq!(stopping.run_batch(&batch).len(), 1);
    }

    #[test]
    fn test_evaluate_expression_convenience() {
        assert_eq!(evaluate_expression("3+(2*5)").unwrap(), 13);
    }
}
