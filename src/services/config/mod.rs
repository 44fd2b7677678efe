// 設定管理
// ワーカー数、実行時間、疑似処理時間、キュー容量

pub mod implementations;

// 公開API
pub use implementations::{
    validate_config, DefaultPipelineConfig, DEFAULT_RELAY_DELAY, DEFAULT_RUN_DURATION,
    DEFAULT_WORKER_COUNT, MAX_CHANNEL_BUFFER_SIZE,
};
