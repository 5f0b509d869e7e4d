//! Sliding-window commands

use super::SequenceArg;
use anyhow::Result;
use clap::{Args, Subcommand};
use sweep_api::Job;

/// Window subcommands
#[derive(Debug, Subcommand)]
pub enum WindowCommands {
    /// Largest sum of any run of exactly `width` values
    MaxSum {
        #[command(flatten)]
        sequence: SequenceArg,

        /// Window width
        #[arg(short, long)]
        width: usize,
    },

    /// Length of the shortest run whose sum reaches a threshold
    Shortest {
        #[command(flatten)]
        sequence: SequenceArg,

        /// Sum to reach
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: i64,
    },

    /// Length of the longest run whose sum equals a target
    LongestEqual {
        #[command(flatten)]
        sequence: SequenceArg,

        /// Exact sum
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
    },

    /// Longest substring with at most `k` distinct characters
    KDistinct(TextArgs),

    /// Longest substring without a repeated character
    NoRepeat {
        /// Text to scan
        text: String,
    },
}

/// Arguments for `window k-distinct`
#[derive(Debug, Args)]
pub struct TextArgs {
    /// Text to scan
    pub text: String,

    /// Maximum distinct characters
    #[arg(short)]
    pub k: usize,
}

impl WindowCommands {
    /// Build the job this command describes
    pub fn to_job(&self) -> Result<Job> {
        let job = match self {
            WindowCommands::MaxSum { sequence, width } => Job::FixedWindowMaxSum {
                values: sequence.values()?,
                width: *width,
            },
            WindowCommands::Shortest {
                sequence,
                threshold,
            } => Job::ShortestSubarrayAtLeast {
                values: sequence.values()?,
                threshold: *threshold,
            },
            WindowCommands::LongestEqual { sequence, target } => Job::LongestSubarrayEqualTo {
                values: sequence.values()?,
                target: *target,
            },
            WindowCommands::KDistinct(args) => Job::LongestSubstringKDistinct {
                text: args.text.clone(),
                k: args.k,
            },
            WindowCommands::NoRepeat { text } => Job::LongestSubstringNoRepeat { text: text.clone() },
        };
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    fn window_job(args: &[&str]) -> Job {
        let cli = Cli::try_parse_from(["sweep", "window"].iter().chain(args)).unwrap();
        match cli.command {
            Commands::Window { subcommand } => subcommand.to_job().unwrap(),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_max_sum_job() {
        assert_eq!(
            window_job(&["max-sum", "-n", "2 1 5 1 3 2", "-w", "3"]),
            Job::FixedWindowMaxSum {
                values: vec![2, 1, 5, 1, 3, 2],
                width: 3,
            }
        );
    }

    #[test]
    fn test_text_jobs() {
        assert_eq!(
            window_job(&["k-distinct", "araaci", "-k", "2"]),
            Job::LongestSubstringKDistinct {
                text: "araaci".to_string(),
                k: 2,
            }
        );
        assert_eq!(
            window_job(&["no-repeat", "abcabcbb"]),
            Job::LongestSubstringNoRepeat {
                text: "abcabcbb".to_string(),
            }
        );
    }

    #[test]
    fn test_longest_equal_job() {
        assert_eq!(
            window_job(&["longest-equal", "-n", "1,2,3", "-t", "-3"]),
            Job::LongestSubarrayEqualTo {
                values: vec![1, 2, 3],
                target: -3,
            }
        );
    }
}
