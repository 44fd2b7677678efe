// Pipeline - Producer → Worker Pool → Aggregator → Checker
// パイプライン全体の組み立てとオーケストレーション

use super::{
    aggregator::{fan_in, FanIn},
    producer::spawn_producer,
    worker::{spawn_relay_workers, worker_channels},
};
use crate::{
    core::{PipelineConfig, PipelineReporter, PipelineResult, RunSummary, SequenceItem},
    services::{
        checker::{drain_combined, verify},
        config::validate_config,
        metrics::PipelineMetrics,
    },
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// 共有入力キューの容量
const INPUT_QUEUE_CAPACITY: usize = 1;
/// ワーカー専用キューの容量
const WORKER_QUEUE_CAPACITY: usize = 1;

/// 連番パイプライン
pub struct SequencePipeline<C, R> {
    config: C,
    reporter: Arc<R>,
}

impl<C, R> SequencePipeline<C, R>
where
    C: PipelineConfig,
    R: PipelineReporter + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(config: C, reporter: R) -> Self {
        Self {
            config,
            reporter: Arc::new(reporter),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 設定された実行時間で実行
    pub async fn run(&self) -> PipelineResult<RunSummary> {
        self.run_with_cancel(CancellationToken::new()).await
    }

    /// 外部からもキャンセルできるトークンを渡して実行
    ///
    /// トークンは実行時間の経過でもキャンセルされる。観測するのはProducerだけで、
    /// ワーカーと結合側はキューが閉じる連鎖で終了する。
    pub async fn run_with_cancel(&self, cancel: CancellationToken) -> PipelineResult<RunSummary> {
        validate_config(&self.config)?;

        let worker_count = self.config.worker_count();
        let run_duration = self.config.run_duration();
        let started_at = Utc::now();
        let start_time = Instant::now();

        self.reporter
            .report_started(worker_count, run_duration)
            .await;

        let metrics = Arc::new(PipelineMetrics::new(worker_count));

        // 実行時間の経過でキャンセル
        let deadline_handle = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = tokio::time::sleep(run_duration) => cancel.cancel(),
                    _ = cancel.cancelled() => {}
                }
            })
        };

        // Producer起動
        let (work_tx, work_rx) = mpsc::channel::<SequenceItem>(INPUT_QUEUE_CAPACITY);
        let input_recorder = Arc::clone(&metrics);
        let producer_handle = spawn_producer(work_tx, cancel.clone(), move |value| {
            input_recorder.record_input(value)
        });

        // Worker Pool起動
        let (outputs, worker_receivers) = worker_channels(worker_count, WORKER_QUEUE_CAPACITY);
        let worker_handles = spawn_relay_workers(work_rx, outputs, self.config.relay_delay());

        // Aggregator起動
        let contribution_recorder = Arc::clone(&metrics);
        let FanIn {
            output: combined_rx,
            handle: aggregator_handle,
            ..
        } = fan_in(
            worker_receivers,
            self.config.channel_buffer_size(),
            move |worker_index| contribution_recorder.record_contribution(worker_index),
        );

        // 結合キューを読み切る
        let observed = drain_combined(combined_rx).await;

        // 全ステージの終了を待ってからメトリクスを確定させる
        producer_handle.await?;
        for handle in worker_handles {
            handle.await?;
        }
        aggregator_handle.await??;
        deadline_handle.await?;

        let summary = RunSummary {
            started_at,
            worker_count,
            run_duration_ms: run_duration.as_millis() as u64,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
            observed,
            metrics: metrics.snapshot(),
        };

        report_and_verify(self.reporter.as_ref(), &summary).await?;
        Ok(summary)
    }
}

/// サマリーを報告してから整合性を検証し、結果を報告する
///
/// サマリーは検証結果に関係なく先に出す。
async fn report_and_verify<R>(reporter: &R, summary: &RunSummary) -> PipelineResult<()>
where
    R: PipelineReporter + ?Sized,
{
    reporter.report_summary(summary).await;

    if let Err(error) = verify(&summary.metrics, &summary.observed) {
        reporter.report_failure(&error).await;
        return Err(error);
    }

    reporter.report_completed(summary).await;
    Ok(())
}
