use anyhow::{bail, Context, Result};

use crate::cli::args::{Cli, Commands, RunOptions};
use crate::cli::logging::init_logging;
use crate::config::AnalysisConfig;
use crate::processors::InventoryProcessor;
use crate::utils::progress::ProgressReporter;
use crate::writers::{write_report_json, RosterWriter};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Analyze(RunOptions::default()));

    match command {
        Commands::Analyze(options) => {
            let config = AnalysisConfig::load(cli.config.as_deref(), &options.overrides())
                .context("Invalid configuration")?;
            analyze(config, cli.quiet)
        }
        Commands::Check(options) => {
            let config = AnalysisConfig::load(cli.config.as_deref(), &options.overrides())
                .context("Invalid configuration")?;
            check(config, cli.quiet)
        }
    }
}

/// Run every configured year and write the roster. Nothing is written unless
/// all years succeed.
pub fn analyze(config: AnalysisConfig, quiet: bool) -> Result<()> {
    if !quiet {
        println!(
            "Analyzing {} / {} files for {}-{}",
            config.fname_prefix_w, config.fname_prefix_v, config.year_s, config.year_e
        );
        println!("Input directory: {}", config.files_dir.display());
        println!("Output file: {}", config.out_file_path.display());
    }

    let years = config.years();
    let progress = ProgressReporter::for_years(years.len() as u64, quiet);

    let processor = InventoryProcessor::new(config);
    let run = processor
        .run(Some(&progress))
        .context("Analysis aborted; no output written")?;

    progress.finish_with_message(&format!("Built roster of {} entries", run.roster.len()));

    let config = processor.config();
    RosterWriter::new(&config.fname_prefix_v)
        .with_year_labels(config.label_year_columns)
        .write(&run.roster, &config.out_file_path)
        .with_context(|| format!("Failed to write {}", config.out_file_path.display()))?;

    if let Some(report_path) = &config.report_path {
        write_report_json(&run.report, report_path)
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
    }

    if !quiet {
        println!("\n{}", run.report.summary());
        println!("Data has been written to {}", config.out_file_path.display());
    }

    Ok(())
}

fn check(config: AnalysisConfig, quiet: bool) -> Result<()> {
    let years = config.years();
    let processor = InventoryProcessor::new(config);
    let failures = processor.check_inputs();

    if failures.is_empty() {
        if !quiet {
            println!(
                "✅ All {} years have both input files with the required columns",
                years.len()
            );
        }
        return Ok(());
    }

    let (input_failures, other_failures): (Vec<_>, Vec<_>) =
        failures.into_iter().partition(|f| f.is_input_error());
    if let Some(failure) = other_failures.into_iter().next() {
        return Err(failure).context("Failed to inspect input files");
    }

    for failure in &input_failures {
        eprintln!("✗ {}", failure);
    }
    bail!("Found {} input problem(s)", input_failures.len())
}
