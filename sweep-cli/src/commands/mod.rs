//! CLI command implementations

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;
use sweep_api::Job;

pub mod eval;
pub mod run;
pub mod scan;
pub mod search;
pub mod session;
pub mod sort;
pub mod window;

pub use session::Session;

/// Single-pass sequence algorithms from the command line
#[derive(Debug, Parser)]
#[command(name = "sweep", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output format (default: from config file, then text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "SWEEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject characters outside the expression grammar
    #[arg(long, global = true)]
    pub strict: bool,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Two-pointer searches over a sequence
    Search {
        #[command(subcommand)]
        subcommand: search::SearchCommands,
    },

    /// Sliding-window scans over a sequence or text
    Window {
        #[command(subcommand)]
        subcommand: window::WindowCommands,
    },

    /// Stable merge sort
    Sort(sort::SortArgs),

    /// Evaluate an integer arithmetic expression
    Eval(eval::EvalArgs),

    /// One-pass extremum scans
    Scan {
        #[command(subcommand)]
        subcommand: scan::ScanCommands,
    },

    /// Run job files (TOML or JSON)
    Run(run::RunArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List job operation names usable in job files
    Operations,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        match self {
            ListCommands::Operations => {
                for name in Job::NAMES {
                    println!("{name}");
                }
            }
            ListCommands::Formats => {
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        println!("{:<10} {}", value.get_name(), help);
                    }
                }
            }
        }
    }
}

/// An integer list argument
#[derive(Debug, Clone, Args)]
pub struct SequenceArg {
    /// Values, comma- or whitespace-separated (e.g. `1,3,5`)
    #[arg(short = 'n', long = "numbers", value_name = "LIST", allow_hyphen_values = true)]
    pub numbers: String,
}

impl SequenceArg {
    /// Parse the list into integers of type `T`
    pub fn values<T: FromStr>(&self) -> Result<Vec<T>, CliError> {
        crate::input::parse_sequence(&self.numbers)
    }
}

impl Cli {
    /// Execute the parsed command line
    pub fn execute(&self) -> Result<()> {
        init_logging(self.global.verbose, self.global.quiet);
        log::debug!("Arguments: {:?}", self);

        let session = Session::resolve(&self.global)?;

        match &self.command {
            Commands::Search { subcommand } => session.run_job(subcommand.to_job()?),
            Commands::Window { subcommand } => session.run_job(subcommand.to_job()?),
            Commands::Sort(args) => session.run_job(args.to_job()?),
            Commands::Eval(args) => session.run_job(args.to_job()?),
            Commands::Scan { subcommand } => session.run_job(subcommand.to_job()?),
            Commands::Run(args) => args.execute(&session),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when embedded
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
