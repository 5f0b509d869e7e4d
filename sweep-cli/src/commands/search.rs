//! Two-pointer search commands

use super::SequenceArg;
use anyhow::Result;
use clap::{Args, Subcommand};
use sweep_api::Job;

/// Search subcommands
#[derive(Debug, Subcommand)]
pub enum SearchCommands {
    /// Indices of two values summing to a target
    TwoSum(TwoSumArgs),

    /// All distinct value triplets summing to a target
    ThreeSum(ThreeSumArgs),

    /// Largest container between two walls
    Container(ContainerArgs),
}

/// Arguments for `search two-sum`
#[derive(Debug, Args)]
pub struct TwoSumArgs {
    #[command(flatten)]
    pub sequence: SequenceArg,

    /// Pair sum to find
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: i64,

    /// Accept input in any order (hash lookup instead of converging pointers)
    #[arg(short, long)]
    pub unsorted: bool,
}

/// Arguments for `search three-sum`
#[derive(Debug, Args)]
pub struct ThreeSumArgs {
    #[command(flatten)]
    pub sequence: SequenceArg,

    /// Triplet sum to find
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    pub target: i64,
}

/// Arguments for `search container`
#[derive(Debug, Args)]
pub struct ContainerArgs {
    #[command(flatten)]
    pub sequence: SequenceArg,
}

impl SearchCommands {
    /// Build the job this command describes
    pub fn to_job(&self) -> Result<Job> {
        let job = match self {
            SearchCommands::TwoSum(args) => {
                let values = args.sequence.values()?;
                if args.unsorted {
                    Job::TwoSumUnsorted {
                        values,
                        target: args.target,
                    }
                } else {
                    Job::TwoSumSorted {
                        values,
                        target: args.target,
                    }
                }
            }
            SearchCommands::ThreeSum(args) => Job::ThreeSum {
                values: args.sequence.values()?,
                target: args.target,
            },
            SearchCommands::Container(args) => Job::MaxContainerArea {
                heights: args.sequence.values()?,
            },
        };
        Ok(job)
    }
}
