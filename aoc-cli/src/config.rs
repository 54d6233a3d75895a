//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    pub year: u16,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory of input files, `~` expanded
    pub input_dir: PathBuf,
    /// Explicit input file for the selected day
    pub input_override: Option<PathBuf>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = args.threads.unwrap_or_else(num_cpus);
        if thread_count == 0 {
            return Err(CliError::Config("--threads must be at least 1".to_string()));
        }
        if args.input.is_some() && args.day.is_none() {
            return Err(CliError::Config("--input requires --day".to_string()));
        }

        Ok(Config {
            year: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_override: args.input.as_deref().map(expand_tilde),
            thread_count,
            parallelize_by: args.parallelize_by,
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
        let args = Args::try_parse_from(std::iter::once("aoc").chain(args.iter().copied()))
            .map_err(|e| CliError::Config(e.to_string()))?;
        Config::from_args(args)
    }

    #[test]
    fn test_tilde_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("/tmp/~x")), PathBuf::from("/tmp/~x"));
        assert_eq!(expand_tilde(Path::new("rel")), PathBuf::from("rel"));
    }

    #[test]
    fn test_resolved_values() {
        let cfg = config(&["--threads", "3", "-d", "5", "-i", "/tmp/five.txt", "-q"]).unwrap();
        assert_eq!(cfg.thread_count, 3);
        assert_eq!(cfg.year, 2024);
        assert_eq!(cfg.day_filter, Some(5));
        assert_eq!(cfg.input_override, Some(PathBuf::from("/tmp/five.txt")));
        assert!(cfg.quiet);
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(config(&["--threads", "0"]), Err(CliError::Config(_))));
    }
}
