//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::request::RunRequest;
use aoc_solver::PuzzleId;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Targets to run
    pub request: RunRequest,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the input tree
    pub input_dir: PathBuf,
    /// Input variant replacing each target's default file
    pub variant: Option<String>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Per-part time limit
    pub timeout: Option<Duration>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, validating what clap cannot
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if let Some(year) = args.year {
            PuzzleId::new(year, 1).map_err(|e| CliError::Config(e.to_string()))?;
        }

        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        if args.timeout.is_some_and(|t| t.is_zero()) {
            return Err(CliError::Config("--timeout must be longer than zero".to_string()));
        }

        let variant = match args.variant {
            Some(v) if v.trim().is_empty() => {
                return Err(CliError::Config("--variant must not be empty".to_string()));
            }
            other => other,
        };

        Ok(Config {
            request: RunRequest::from_selection(args.year, &args.day, args.part),
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            variant,
            thread_count,
            parallelize_by: args.parallelize_by,
            timeout: args.timeout,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(std::iter::once("aoc").chain(args.iter().copied())).unwrap())
    }

    #[test]
    fn test_request_from_args() {
        let config = config(&["-y", "2018", "-d", "5", "-p", "2", "--threads", "3"]).unwrap();
        assert_eq!(
            config.request,
            RunRequest::SpecificParts {
                year: 2018,
                parts: [(5, 2)].into()
            }
        );
        assert_eq!(config.thread_count, 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(config(&["-y", "2014"]), Err(CliError::Config(_))));
        assert!(matches!(config(&["--threads", "0"]), Err(CliError::Config(_))));
        assert!(matches!(config(&["--timeout", "0s"]), Err(CliError::Config(_))));
        assert!(matches!(config(&["--variant", " "]), Err(CliError::Config(_))));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
