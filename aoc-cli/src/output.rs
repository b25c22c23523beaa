//! Output formatting for execution results

use crate::aggregator::Report;
use crate::executor::ExecutionResult;
use chrono::{DateTime, Local, TimeDelta};
use std::time::Instant;

/// Output formatter for execution results
pub struct OutputFormatter {
    quiet: bool,
    started_at: DateTime<Local>,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started_at: Local::now(),
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &ExecutionResult) {
        match (&result.outcome, self.quiet) {
            (Ok(_), _) | (Err(_), false) => println!("{}", self.format_result(result)),
            (Err(_), true) => eprintln!("{}", self.format_result(result)),
        }
    }

    /// One report line; quiet mode keeps only the answer
    fn format_result(&self, result: &ExecutionResult) -> String {
        let timing = format_duration(result.elapsed);
        match (&result.outcome, self.quiet) {
            (Ok(answer), true) => answer.to_string(),
            (Ok(answer), false) => format!("{}: {} ({})", result.part, answer, timing),
            (Err(e), true) => format!("Error: {}: {}", result.part, e),
            (Err(e), false) => {
                format!("{}: FAILED [{}] {} ({})", result.part, e.kind(), e, timing)
            }
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, report: &Report) {
        if self.quiet {
            return;
        }

        let total = report.results().len();
        let successes = report.succeeded();
        let failures = total - successes;
        let total_solve_time = report.total_solve_time();
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Started: {}", self.started_at.format("%Y-%m-%d %H:%M:%S"));
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_solve_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
        if failures > 0 {
            println!("Failed:");
            for result in report.failures() {
                if let Err(e) = &result.outcome {
                    println!("  - {} [{}]", result.part, e.kind());
                }
            }
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}
