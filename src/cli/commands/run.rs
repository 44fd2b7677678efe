use crate::cli::args::{Cli, OutputFormat};
use crate::core::RunSummary;
use crate::engine::{run_until_interrupted, SequencePipeline};
use crate::services::{ConsoleReporter, DefaultPipelineConfig, SummaryFormat};
use anyhow::{Context, Result};
use std::time::Duration;

impl From<OutputFormat> for SummaryFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => SummaryFormat::Text,
            OutputFormat::Json => SummaryFormat::Json,
        }
    }
}

/// Build the pipeline configuration from command line arguments
pub fn config_from_cli(cli: &Cli) -> DefaultPipelineConfig {
    let config = DefaultPipelineConfig::new(cli.workers)
        .with_run_duration(Duration::from_millis(cli.duration_ms))
        .with_relay_delay(Duration::from_millis(cli.delay_ms));

    match cli.buffer {
        Some(buffer) => config.with_buffer_size(buffer),
        None => config,
    }
}

/// Build the console reporter from command line arguments
pub fn reporter_from_cli(cli: &Cli) -> ConsoleReporter {
    let reporter = if cli.quiet {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::new()
    };
    reporter.with_format(cli.format.into())
}

/// Execute the pipeline run described by the command line
pub async fn execute_run(cli: &Cli) -> Result<RunSummary> {
    let config = config_from_cli(cli);
    config.validate().context("invalid pipeline configuration")?;

    let pipeline = SequencePipeline::new(config, reporter_from_cli(cli));
    let summary = run_until_interrupted(&pipeline)
        .await
        .context("pipeline consistency check failed")?;

    Ok(summary)
}
