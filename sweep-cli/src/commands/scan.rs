//! One-pass scan commands

use super::SequenceArg;
use anyhow::Result;
use clap::Subcommand;
use sweep_api::Job;

/// Scan subcommands
#[derive(Debug, Subcommand)]
pub enum ScanCommands {
    /// Best gain from buying at one price and selling at a later one
    Profit {
        #[command(flatten)]
        sequence: SequenceArg,
    },

    /// Largest value strictly below the maximum
    SecondLargest {
        #[command(flatten)]
        sequence: SequenceArg,
    },
}

impl ScanCommands {
    /// Build the job this command describes
    pub fn to_job(&self) -> Result<Job> {
        let job = match self {
            ScanCommands::Profit { sequence } => Job::MaxProfit {
                prices: sequence.values()?,
            },
            ScanCommands::SecondLargest { sequence } => Job::SecondLargest {
                values: sequence.values()?,
            },
        };
        Ok(job)
    }
}
