// テスト用の実装
// 故障を注入したリレーワーカーと、呼び出し順を記録するレポーター

use async_trait::async_trait;
use fan_pipeline::core::{PipelineError, PipelineReporter, RunSummary, SequenceItem};
use fan_pipeline::engine::SharedReceiver;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;

/// 最初に受け取った `skip` 件を転送せずに捨てるリレーワーカー
pub fn spawn_lossy_relay_worker(
    work_rx: SharedReceiver,
    out_tx: mpsc::Sender<SequenceItem>,
    delay: Duration,
    skip: usize,
) -> tokio::task::JoinHandle<Vec<SequenceItem>> {
    tokio::spawn(async move {
        let mut dropped = Vec::new();
        loop {
            let value = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(value) => value,
                    None => break,
                }
            };

            if dropped.len() < skip {
                dropped.push(value);
            } else if out_tx.send(value).await.is_err() {
                break;
            }

            tokio::time::sleep(delay).await;
        }
        dropped
    })
}

/// 受け取ったイベント名を順に記録するレポーター
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl PipelineReporter for RecordingReporter {
    async fn report_started(&self, worker_count: usize, _run_duration: Duration) {
        self.push(format!("started:{worker_count}"));
    }

    async fn report_summary(&self, summary: &RunSummary) {
        self.push(summary.count_line());
        self.push(summary.sum_line());
        self.push(summary.breakdown_line());
    }

    async fn report_completed(&self, _summary: &RunSummary) {
        self.push("completed".to_string());
    }

    async fn report_failure(&self, error: &PipelineError) {
        self.push(format!("failed:{}", error.kind()));
    }
}
