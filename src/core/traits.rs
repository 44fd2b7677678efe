// パイプラインのトレイト定義
// 設定と報告の抽象化インターフェース

use super::error::PipelineError;
use super::types::RunSummary;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// リレーワーカー数
    fn worker_count(&self) -> usize;

    /// 生成を続ける時間（この時間が経つとキャンセルされる）
    fn run_duration(&self) -> Duration;

    /// ワーカーが1件ごとに待つ疑似処理時間
    fn relay_delay(&self) -> Duration;

    /// 結合キューの容量（ワーカー数未満なら切り上げ）
    fn channel_buffer_size(&self) -> usize;
}

// PipelineConfig for Box<dyn PipelineConfig>
impl PipelineConfig for Box<dyn PipelineConfig> {
    fn worker_count(&self) -> usize {
        self.as_ref().worker_count()
    }

    fn run_duration(&self) -> Duration {
        self.as_ref().run_duration()
    }

    fn relay_delay(&self) -> Duration {
        self.as_ref().relay_delay()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }
}

/// 実行状況の報告を抽象化するトレイト
#[automock]
#[async_trait]
pub trait PipelineReporter: Send + Sync {
    /// パイプライン開始時の報告
    async fn report_started(&self, worker_count: usize, run_duration: Duration);

    /// 排出完了後のサマリー報告（整合性チェックの前に呼ばれる）
    async fn report_summary(&self, summary: &RunSummary);

    /// 整合性チェック成功時の報告
    async fn report_completed(&self, summary: &RunSummary);

    /// 整合性チェック失敗時の報告
    async fn report_failure(&self, error: &PipelineError);
}

// PipelineReporter for Box<dyn PipelineReporter>
#[async_trait]
impl PipelineReporter for Box<dyn PipelineReporter> {
    async fn report_started(&self, worker_count: usize, run_duration: Duration) {
        self.as_ref().report_started(worker_count, run_duration).await
    }

    async fn report_summary(&self, summary: &RunSummary) {
        self.as_ref().report_summary(summary).await
    }

    async fn report_completed(&self, summary: &RunSummary) {
        self.as_ref().report_completed(summary).await
    }

    async fn report_failure(&self, error: &PipelineError) {
        self.as_ref().report_failure(error).await
    }
}
