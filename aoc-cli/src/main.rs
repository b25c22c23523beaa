//! AOC CLI - Command-line runner for registered Advent of Code puzzle units

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod logging;
mod output;
mod request;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aggregator::{Report, ResultAggregator};
use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::{ArcExecutorError, CliError};
use executor::Executor;
use output::OutputFormatter;
use std::process::ExitCode;

/// Exit status when a part failed
const EXIT_FAILURES: u8 = 1;
/// Exit status when the run could not start
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    executor::install_panic_hook();

    let outcome = run(args);
    if let Err(e) = &outcome {
        eprintln!("Error: {}", e);
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 when every part succeeded, 1 when a part failed, 2 when the run could not start
fn exit_status(outcome: &Result<Report, CliError>) -> u8 {
    match outcome {
        Ok(report) if report.all_succeeded() => 0,
        Ok(_) => EXIT_FAILURES,
        Err(_) => EXIT_FATAL,
    }
}

fn run(args: Args) -> Result<Report, CliError> {
    let config = Config::from_args(args)?;
    tracing::debug!(?config, "resolved configuration");

    // Registration happens once, before any request is accepted
    let registry = build_registry(&config.tags)?;

    let executor = Executor::new(registry, &config).map_err(ArcExecutorError::from)?;
    let work_items = executor.collect_work_items()?;
    if work_items.is_empty() {
        if !config.quiet {
            println!("No solvers found matching the specified filters.");
        }
        return Ok(Report::default());
    }

    executor.preflight()?;
    run_executor(executor, work_items, config.quiet)
}

/// Run the executor and collect results
fn run_executor(
    executor: Executor,
    work_items: Vec<request::WorkItem>,
    quiet: bool,
) -> Result<Report, CliError> {
    if !quiet {
        println!("Running {} target(s)...", work_items.len());
    }

    let expected_keys: Vec<_> = work_items
        .iter()
        .flat_map(|w| w.parts.iter().map(move |&p| w.id.part(p)))
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(work_items, tx));

    // Collect and display results in order using aggregator
    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        tracing::warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::ExecutorPanicked)??;

    let report = Report::new(results);
    formatter.print_summary(&report);
    Ok(report)
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| has_all_tags(plugin.tags, tags))?
    };

    Ok(builder.build())
}

/// A plugin is selected only when it carries every requested tag
fn has_all_tags(plugin_tags: &[&str], wanted: &[String]) -> bool {
    wanted.iter().all(|tag| plugin_tags.contains(&tag.as_str()))
}
