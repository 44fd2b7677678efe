// 高レベルAPI - よく使う構成の便利関数

use super::pipeline::SequencePipeline;
use crate::core::{PipelineConfig, PipelineReporter, PipelineResult, RunSummary};
use crate::services::NoOpReporter;
use tokio_util::sync::CancellationToken;

/// 何も出力しないパイプラインを作成（テスト・ベンチマーク用）
pub fn create_quiet_pipeline<C>(config: C) -> SequencePipeline<C, NoOpReporter>
where
    C: PipelineConfig,
{
    SequencePipeline::new(config, NoOpReporter::new())
}

/// 設定を指定して静かに1回実行
pub async fn run_quiet<C>(config: C) -> PipelineResult<RunSummary>
where
    C: PipelineConfig,
{
    create_quiet_pipeline(config).run().await
}

/// Ctrl+Cでも早期キャンセルできる形で実行
pub async fn run_until_interrupted<C, R>(
    pipeline: &SequencePipeline<C, R>,
) -> PipelineResult<RunSummary>
where
    C: PipelineConfig,
    R: PipelineReporter + 'static,
{
    let cancel = CancellationToken::new();

    let interrupt = cancel.clone();
    let signal_handle = tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    interrupt.cancel();
                }
            }
            _ = interrupt.cancelled() => {}
        }
    });

    let result = pipeline.run_with_cancel(cancel.clone()).await;

    // シグナル待ちタスクを終わらせる
    cancel.cancel();
    signal_handle.await?;

    result
}
