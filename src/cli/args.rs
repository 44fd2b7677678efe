use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fan_pipeline")]
#[command(about = "Run a producer / worker pool / fan-in pipeline and verify its tallies")]
#[command(version)]
pub struct Cli {
    /// Number of relay workers
    #[arg(short, long, default_value = "5")]
    pub workers: usize,

    /// How long the producer keeps emitting, in milliseconds
    #[arg(short, long, default_value = "1000")]
    pub duration_ms: u64,

    /// Simulated per-item processing delay of each worker, in milliseconds
    #[arg(long, default_value = "1")]
    pub delay_ms: u64,

    /// Capacity of the combined queue (raised to the worker count if smaller)
    #[arg(short, long)]
    pub buffer: Option<usize>,

    /// Summary output format; `json` replaces the three-line text summary with one JSON object
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
