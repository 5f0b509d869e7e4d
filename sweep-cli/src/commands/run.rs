//! Run command implementation

use super::Session;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use sweep_api::{JobFailure, Processor, Report};

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Job files, directories or glob patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Run job files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: config file, then CPU count)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Stop at the first failing job
    #[arg(long)]
    pub stop_on_error: bool,
}

/// Results of one job file
#[derive(Debug)]
struct FileRun {
    path: PathBuf,
    results: Result<Vec<Result<Report, JobFailure>>>,
}

impl FileRun {
    fn failed_jobs(&self) -> usize {
        match &self.results {
            Ok(results) => results.iter().filter(|r| r.is_err()).count(),
            Err(_) => 1,
        }
    }
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self, session: &Session) -> Result<()> {
        log::info!("Starting batch run");

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} job file(s)", files.len());

        let mut config = session.api_config.clone();
        config.stop_on_error |= self.stop_on_error;
        let processor = Processor::with_config(config);

        let mut progress = ProgressReporter::new(session.quiet);
        progress.init_files(files.len() as u64);

        let runs = if self.parallel {
            let threads = self.thread_count(session);
            log::info!("Running in parallel on {} thread(s)", threads);

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| run_file(path, &processor, &progress))
                    .collect::<Vec<_>>()
            })
        } else {
            let mut runs = Vec::with_capacity(files.len());
            for path in &files {
                let run = run_file(path, &processor, &progress);
                let failed = run.failed_jobs() > 0;
                runs.push(run);
                if failed && processor.config().stop_on_error {
                    log::info!("Skipping remaining job files after failure");
                    break;
                }
            }
            runs
        };

        progress.finish();
        self.report(session, &runs)
    }

    fn thread_count(&self, session: &Session) -> usize {
        self.threads
            .filter(|&threads| threads > 0)
            .or((session.worker_threads > 0).then_some(session.worker_threads))
            .unwrap_or_else(num_cpus::get)
    }

    /// Write reports in input order; failures go to stderr
    fn report(&self, session: &Session, runs: &[FileRun]) -> Result<()> {
        let mut formatter = session.formatter(true)?;
        let mut total = 0;
        let mut failed = 0;

        for run in runs {
            let source = run.path.display().to_string();
            formatter.begin_source(&source)?;

            match &run.results {
                Ok(results) => {
                    for result in results {
                        total += 1;
                        match result {
                            Ok(report) => formatter.format_report(report)?,
                            Err(failure) => {
                                failed += 1;
                                eprintln!("{source}: {failure}");
                            }
                        }
                    }
                }
                Err(err) => {
                    total += 1;
                    failed += 1;
                    eprintln!("{source}: {err:#}");
                }
            }
        }

        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::JobsFailed { failed, total }.into());
        }
        Ok(())
    }
}

fn run_file(path: &Path, processor: &Processor, progress: &ProgressReporter) -> FileRun {
    let results = FileReader::read_batch(path).map(|batch| processor.run_batch(&batch));

    let run = FileRun {
        path: path.to_path_buf(),
        results,
    };

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    progress.file_completed(name, run.failed_jobs());

    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::fs;
    use sweep_api::Config;
    use tempfile::TempDir;

    fn session(output: PathBuf, worker_threads: usize) -> Session {
        Session {
            format: OutputFormat::Text,
            output: Some(output),
            pretty_json: false,
            quiet: true,
            worker_threads,
            api_config: Config::default(),
        }
    }

    fn args(input: &str) -> RunArgs {
        RunArgs {
            input: vec![input.to_string()],
            parallel: false,
            threads: None,
            stop_on_error: false,
        }
    }

    #[test]
    fn test_thread_count_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out.txt");

        let mut run = args("*.toml");
        run.threads = Some(3);
        assert_eq!(run.thread_count(&session(out.clone(), 5)), 3);

        run.threads = None;
        assert_eq!(run.thread_count(&session(out.clone(), 5)), 5);

        assert_eq!(run.thread_count(&session(out, 0)), num_cpus::get());
    }

    #[test]
    fn test_runs_file_and_reports_failures() {
        let temp_dir = TempDir::new().unwrap();
        let jobs = temp_dir.path().join("jobs.toml");
        fs::write(
            &jobs,
            r#"
            [[jobs]]
            op = "evaluate"
            expression = "2+3*4"

            [[jobs]]
            name = "broken"
            op = "evaluate"
            expression = "(1"
            "#,
        )
        .unwrap();
        let out = temp_dir.path().join("out.txt");

        let err = args(&jobs.display().to_string())
            .execute(&session(out.clone(), 0))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::JobsFailed {
                failed: 1,
                total: 2
            })
        ));

        let written = fs::read_to_string(out).unwrap();
        assert!(written.contains("evaluate: 14"));
        assert!(!written.contains("broken"));
    }

    #[test]
    fn test_parallel_keeps_input_order() {
        let temp_dir = TempDir::new().unwrap();
        for (name, expr) in [("a.json", "1+1"), ("b.json", "2+2"), ("c.json", "3+3")] {
            fs::write(
                temp_dir.path().join(name),
                format!(r#"{{"jobs": [{{"op": "evaluate", "expression": "{expr}"}}]}}"#),
            )
            .unwrap();
        }
        let out = temp_dir.path().join("out.txt");

        let mut run = args(&temp_dir.path().join("*.json").display().to_string());
        run.parallel = true;
        run.threads = Some(3);
        run.execute(&session(out.clone(), 0)).unwrap();

        let written = fs::read_to_string(out).unwrap();
        let values: Vec<&str> = written
            .lines()
            .filter(|line| line.starts_with("evaluate: "))
            .collect();
        assert_eq!(values, vec!["evaluate: 2", "evaluate: 4", "evaluate: 6"]);
    }
}
