//! Eval command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Read};
use sweep_api::Job;

/// Arguments for the eval command
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Expression such as `3+(2*5)`; read from stdin when omitted
    pub expression: Option<String>,
}

impl EvalArgs {
    /// Build the evaluation job
    pub fn to_job(&self) -> Result<Job> {
        let expression = match &self.expression {
            Some(expression) => expression.clone(),
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read expression from stdin")?;
                buffer.trim_end().to_string()
            }
        };

        Ok(Job::Evaluate { expression })
    }
}
