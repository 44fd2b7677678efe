pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{
    MetricsSnapshot, ObservedTotals, PipelineConfig, PipelineError, PipelineReporter,
    PipelineResult, RunSummary, SequenceItem,
};
pub use engine::{fan_in, spawn_producer, spawn_relay_workers, SequencePipeline};
pub use services::{ConsoleReporter, DefaultPipelineConfig, NoOpReporter, PipelineMetrics};
