//! Application entry point and dispatch.

use anyhow::Result;

use dicecalc_cli::output::write_distribution;
use dicecalc_cli::presenter::CLIResultPresenter;
use dicecalc_cli::ui;
use dicecalc_core::memory_budget::{parse_memory_limit, MemoryEstimate};
use dicecalc_core::observers::LoggingObserver;
use dicecalc_core::options::Options;
use dicecalc_core::registry::DefaultFactory;
use dicecalc_orchestration::engine_selection::get_engines_to_run;
use dicecalc_orchestration::interfaces::ResultPresenter;
use dicecalc_orchestration::orchestrator::{
    analyze_comparison_results, execute_calculations_with_observer,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        dicecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // clap enforces both positionals whenever --completion is absent
    let (faces, num) = match (config.faces, config.num) {
        (Some(faces), Some(num)) => (faces, num),
        _ => anyhow::bail!("faces and num are required"),
    };

    let opts = Options {
        workers: config.workers,
        scan_chunk_factor: 0,
        verbose: config.verbose,
        details: config.details,
    }
    .normalize();

    // Memory budget check
    let limit = parse_memory_limit(&config.memory_limit).map_err(anyhow::Error::msg)?;
    let limit = (limit != 0).then_some(limit);
    let estimate = MemoryEstimate::estimate(faces, num, opts.worker_count());
    if !estimate.fits_in(limit) {
        anyhow::bail!(
            "Estimated memory ({} MB) exceeds limit ({} MB)",
            estimate.total_bytes / (1024 * 1024),
            limit.unwrap_or(0) / (1024 * 1024)
        );
    }

    let factory = DefaultFactory::new();
    let engines = get_engines_to_run(&config.algo, &factory)?;

    // Per-step progress surfaces through tracing when requested
    let observer = LoggingObserver::new(250);
    let results =
        execute_calculations_with_observer(&engines, faces, num, &opts, &observer);

    // Cross-check before presenting anything
    let comparison = if results.len() > 1 {
        analyze_comparison_results(&results)
    } else {
        Ok(())
    };

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.full);
    for result in &results {
        match &result.outcome {
            Ok(value) => presenter.present_result(
                &result.algorithm,
                faces,
                num,
                value,
                result.duration,
                config.details,
            ),
            Err(error) => presenter.present_error(&error.to_string()),
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(dist) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_distribution(path, dist)?;
        }
    }

    if let Err(e) = comparison {
        ui::print_error(&e.to_string());
        return Err(e.into());
    }

    // Any engine failure is a failure of the run
    if let Some(failed) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(failed.clone().into());
    }

    Ok(())
}
