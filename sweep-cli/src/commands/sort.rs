//! Sort command implementation

use super::SequenceArg;
use anyhow::Result;
use clap::Args;
use sweep_api::Job;

/// Arguments for the sort command
#[derive(Debug, Args)]
pub struct SortArgs {
    #[command(flatten)]
    pub sequence: SequenceArg,

    /// Sort largest first
    #[arg(short, long)]
    pub descending: bool,
}

impl SortArgs {
    /// Build the merge sort job
    pub fn to_job(&self) -> Result<Job> {
        Ok(Job::MergeSort {
            values: self.sequence.values()?,
            descending: self.descending,
        })
    }
}
