// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせてパイプライン全体を構成

pub mod aggregator;
pub mod api;
mod pipeline;
pub mod producer;
pub mod worker;

// 公開API
pub use aggregator::{fan_in, FanIn};
pub use api::{create_quiet_pipeline, run_quiet, run_until_interrupted};
pub use pipeline::SequencePipeline;
pub use producer::spawn_producer;
pub use worker::{spawn_relay_worker, spawn_relay_workers, worker_channels, SharedReceiver};
