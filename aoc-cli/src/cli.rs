//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Parallelization level for target execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute every target in order
    Sequential,
    /// Parallelize across years; days run sequentially within each year
    Year,
    /// Parallelize across year/day combinations (default)
    #[default]
    Day,
}

/// Advent of Code puzzle runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run registered Advent of Code puzzle units", version)]
pub struct Args {
    /// Year to run (runs every registered year if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Days to run, repeatable or comma-separated (runs every registered day if omitted)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        requires = "year",
        value_parser = clap::value_parser!(u8).range(1..=25)
    )]
    pub day: Vec<u8>,

    /// Part to run (runs every part if omitted)
    #[arg(short, long, requires = "day", value_parser = clap::value_parser!(u8).range(1..))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Root directory of puzzle inputs, laid out as `<dir>/<year>/dayDD.txt`
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Input variant to load instead of the default file (`sample` reads `dayDD-sample.txt`)
    #[arg(long)]
    pub variant: Option<String>,

    /// Number of threads for parallel execution
    #[arg(long, env = "AOC_THREADS")]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, or day
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Fail any part running longer than this (e.g. `5s`, `500ms`)
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug diagnostics to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
