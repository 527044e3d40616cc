//! Application entry point and dispatch.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use strassen_cli::generator::generate_to_file;
use strassen_cli::input::open_blocks;
use strassen_cli::presenter::write_summary_json;
use strassen_cli::{BlockSummary, ConsolePresenter, Element, MatrixBlock, ReportWriter};
use strassen_core::memory_budget::{parse_memory_limit, MemoryEstimate};
use strassen_core::{
    compare_results, Matrix, Multiplier, NaiveMultiplier, OperationResult, StrassenMultiplier,
};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if let Some(ref path) = config.generate {
        let blocks = generate_to_file(path, config.max_power, config.seed)
            .with_context(|| format!("cannot write benchmark input '{}'", path.display()))?;
        if !config.quiet {
            println!("Wrote {blocks} benchmark blocks to '{}'", path.display());
        }
    }

    match config.input {
        Some(ref input) => run_blocks(config, input),
        None if config.generate.is_some() => Ok(()),
        None => Err(AppError::Config("no input file given".into()).into()),
    }
}

fn run_blocks(config: &AppConfig, input: &Path) -> Result<()> {
    let memory_limit = parse_memory_limit(&config.memory_limit).map_err(AppError::Config)?;

    let reader = open_blocks(input)
        .with_context(|| format!("cannot open input '{}'", input.display()))?;
    let file = File::create(&config.output)
        .with_context(|| format!("cannot create report '{}'", config.output.display()))?;
    let mut report = ReportWriter::new(BufWriter::new(file));

    let mut presenter = ConsolePresenter::new(config.verbose, config.quiet);
    presenter.present_output_location(&config.output)?;

    let mut summaries = Vec::new();
    for (index, block) in reader.enumerate() {
        let number = index + 1;
        let block = block.with_context(|| format!("block {number} of '{}'", input.display()))?;
        check_memory(block.order, memory_limit)?;

        let summary = process_block(&block, &mut report)
            .with_context(|| format!("block {number} (order {})", block.order))?;
        presenter.present_summary(&summary)?;
        summaries.push(summary);
    }

    if let Some(ref path) = config.summary_json {
        write_summary_json(path, &summaries)
            .with_context(|| format!("cannot write summary '{}'", path.display()))?;
    }

    tracing::info!(blocks = report.blocks_written(), "run complete");
    Ok(())
}

fn check_memory(order: usize, limit: Option<usize>) -> Result<(), AppError> {
    let estimate = MemoryEstimate::estimate::<Element>(order);
    if estimate.fits_in(limit) {
        return Ok(());
    }
    Err(AppError::MemoryBudget {
        order,
        needed_mb: estimate.total_bytes / (1024 * 1024),
        limit_mb: limit.unwrap_or(0) / (1024 * 1024),
    })
}

/// Multiply one block with both algorithms, verify they agree and report it.
fn process_block<W: Write>(
    block: &MatrixBlock,
    report: &mut ReportWriter<W>,
) -> Result<BlockSummary> {
    let naive_multiplier: &dyn Multiplier<Element> = &NaiveMultiplier;
    let strassen_multiplier: &dyn Multiplier<Element> = &StrassenMultiplier;

    let (naive, naive_time) = timed(naive_multiplier, &block.a, &block.b)?;
    let (strassen, strassen_time) = timed(strassen_multiplier, &block.a, &block.b)?;

    compare_results(&[
        (naive_multiplier.name(), &naive.result),
        (strassen_multiplier.name(), &strassen.result),
    ])?;

    let summary = BlockSummary::new(block.order, naive.counts, strassen.counts)
        .with_durations(naive_time, strassen_time);
    report.write_block(&summary, &block.a, &block.b, &naive.result, &strassen.result)?;
    Ok(summary)
}

fn timed<'a>(
    multiplier: &dyn Multiplier<Element>,
    a: &'a Matrix<Element>,
    b: &'a Matrix<Element>,
) -> Result<(OperationResult<'a, Element>, Duration)> {
    let start = Instant::now();
    let result = multiplier.multiply(a, b)?;
    Ok((result, start.elapsed()))
}
