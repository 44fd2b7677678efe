// サービス層 - 機能別のロジック
// 各サービスは特定の責任を持ち、エンジン層から組み合わせて使う

pub mod checker;
pub mod config;
pub mod metrics;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use checker::{drain_combined, verify};
pub use config::DefaultPipelineConfig;
pub use metrics::PipelineMetrics;
pub use monitoring::{ConsoleReporter, NoOpReporter, SummaryFormat};
