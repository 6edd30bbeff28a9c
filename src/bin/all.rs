//! CLI entry point.
//!
//! Usage:
//!   algo-bench                # Run all benchmarks with the default workload
//!   algo-bench --list         # List benchmark subjects
//!   algo-bench --sort-size 1000 --search-size 100000 --no-pause
//!   algo-bench --help         # Show help

use anyhow::Context;
use parallel_algo_bench::prelude::*;
use parallel_algo_bench::utils::logging::init_logging;
use parallel_algo_bench::utils::memory::peak_memory_mb;
use parallel_algo_bench::{run_benchmarks, tui};
use std::sync::Arc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging().context("failed to install log subscriber")?;

    let config = match HarnessConfig::from_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run(config)) => config,
        Ok(CliCommand::Help) => {
            tui::print_help();
            return Ok(());
        }
        Ok(CliCommand::List) => {
            tui::print_available_algorithms(&build_registry());
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            tui::print_help();
            std::process::exit(1);
        }
    };

    tui::print_banner("Starting process");
    tui::print_memory("Initial memory", peak_memory_mb());

    let registry = build_registry();
    let inputs = Arc::new(BenchmarkInputs::from_config(&config).context("invalid workload size")?);
    info!(
        subjects = registry.len(),
        sort_size = config.sort_size,
        search_size = config.search_size,
        sequential = config.sequential,
        "inputs ready"
    );

    tui::print_banner("Waiting for benchmarks to complete");
    let outcomes = run_benchmarks(registry.all(), inputs, &config);

    tui::print_banner("Showing results");
    tui::print_memory("Final memory", peak_memory_mb());
    tui::print_results_table(&outcomes);
    tui::print_crash_details(&outcomes);

    tui::print_banner("End of program");
    if config.pause {
        tui::pause();
    }

    Ok(())
}
