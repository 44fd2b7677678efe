// 実行状況報告の具象実装

use crate::core::{PipelineError, PipelineReporter, RunSummary};
use async_trait::async_trait;
use std::time::Duration;

/// サマリーの出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

/// サマリーを出力形式に従って文字列化
pub fn render_summary(summary: &RunSummary, format: SummaryFormat) -> String {
    match format {
        SummaryFormat::Text => [
            summary.count_line(),
            summary.sum_line(),
            summary.breakdown_line(),
        ]
        .join("\n"),
        SummaryFormat::Json => serde_json::to_string(summary)
            .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}")),
    }
}

/// コンソール出力による報告実装
/// サマリーは標準出力、経過メッセージは標準エラー出力に書く
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
    format: SummaryFormat,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 経過メッセージを出さない（サマリーは常に出力）
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: SummaryFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> SummaryFormat {
        self.format
    }
}

#[async_trait]
impl PipelineReporter for ConsoleReporter {
    async fn report_started(&self, worker_count: usize, run_duration: Duration) {
        if !self.quiet {
            eprintln!(
                "🚀 Starting pipeline: {worker_count} workers for {}ms",
                run_duration.as_millis()
            );
        }
    }

    async fn report_summary(&self, summary: &RunSummary) {
        println!("{}", render_summary(summary, self.format));
    }

    async fn report_completed(&self, summary: &RunSummary) {
        if !self.quiet {
            eprintln!(
                "✅ Consistent! {} items through {} workers in {}ms",
                summary.observed.count, summary.worker_count, summary.elapsed_ms
            );
        }
    }

    async fn report_failure(&self, error: &PipelineError) {
        if !self.quiet {
            eprintln!("⚠️  Consistency check failed ({}): {error}", error.kind());
        }
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineReporter for NoOpReporter {
    async fn report_started(&self, _worker_count: usize, _run_duration: Duration) {
        // 何もしない
    }

    async fn report_summary(&self, _summary: &RunSummary) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &RunSummary) {
        // 何もしない
    }

    async fn report_failure(&self, _error: &PipelineError) {
        // 何もしない
    }
}
