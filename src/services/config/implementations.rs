// 設定管理の具象実装

use crate::core::{PipelineConfig, PipelineError, PipelineResult};
use std::time::Duration;

/// 既定のワーカー数
pub const DEFAULT_WORKER_COUNT: usize = 5;
/// 既定の実行時間
pub const DEFAULT_RUN_DURATION: Duration = Duration::from_secs(1);
/// 既定の疑似処理時間
pub const DEFAULT_RELAY_DELAY: Duration = Duration::from_millis(1);
/// 結合キュー容量の上限（ワーカー数もこれを超えられない）
pub const MAX_CHANNEL_BUFFER_SIZE: usize = 1 << 20;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    worker_count: usize,
    run_duration: Duration,
    relay_delay: Duration,
    buffer_size: Option<usize>,
}

impl DefaultPipelineConfig {
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count,
            ..Self::default()
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_run_duration(mut self, run_duration: Duration) -> Self {
        self.run_duration = run_duration;
        self
    }

    pub fn with_relay_delay(mut self, relay_delay: Duration) -> Self {
        self.relay_delay = relay_delay;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = Some(buffer_size);
        self
    }

    /// 起動前の設定検証
    pub fn validate(&self) -> PipelineResult<()> {
        validate_config(self)
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            run_duration: DEFAULT_RUN_DURATION,
            relay_delay: DEFAULT_RELAY_DELAY,
            buffer_size: None,
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn run_duration(&self) -> Duration {
        self.run_duration
    }

    fn relay_delay(&self) -> Duration {
        self.relay_delay
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
            .unwrap_or(self.worker_count)
            .max(self.worker_count)
            .max(1)
    }
}

/// 任意の設定実装に対する検証
pub fn validate_config<C: PipelineConfig + ?Sized>(config: &C) -> PipelineResult<()> {
    if config.worker_count() == 0 {
        return Err(PipelineError::configuration(
            "worker_count は1以上である必要があります",
        ));
    }
    if config.run_duration().is_zero() {
        return Err(PipelineError::configuration(
            "run_duration は0より大きい必要があります",
        ));
    }
    let buffer_size = config.channel_buffer_size();
    if buffer_size > MAX_CHANNEL_BUFFER_SIZE {
        return Err(PipelineError::configuration(format!(
            "channel_buffer_size は{MAX_CHANNEL_BUFFER_SIZE}以下である必要があります (指定値: {buffer_size})"
        )));
    }
    Ok(())
}
