// パイプラインで扱うデータ型定義

use chrono::{DateTime, Utc};
use serde::Serialize;

/// パイプラインを流れる値
pub type SequenceItem = i64;

/// 結合キューの出力側で観測した合計と件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ObservedTotals {
    pub sum: i64,
    pub count: i64,
}

impl ObservedTotals {
    /// 1件分を加算（メトリクス側のアトミック加算と同じくラップする）
    pub fn observe(&mut self, value: SequenceItem) {
        self.sum = self.sum.wrapping_add(value);
        self.count = self.count.wrapping_add(1);
    }
}

/// メトリクスの確定値（全ステージ終了後に読み出す）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub input_sum: i64,
    pub input_count: i64,
    pub amounts: Vec<i64>,
}

impl MetricsSnapshot {
    /// ワーカー別件数の合計
    pub fn attributed_count(&self) -> i64 {
        self.amounts.iter().sum()
    }
}

/// 1回の実行のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub worker_count: usize,
    pub run_duration_ms: u64,
    pub elapsed_ms: u64,
    pub observed: ObservedTotals,
    pub metrics: MetricsSnapshot,
}

impl RunSummary {
    /// 件数の行
    pub fn count_line(&self) -> String {
        format!(
            "Count: recorded={} observed={}",
            self.metrics.input_count, self.observed.count
        )
    }

    /// 合計の行
    pub fn sum_line(&self) -> String {
        format!(
            "Sum: recorded={} observed={}",
            self.metrics.input_sum, self.observed.sum
        )
    }

    /// ワーカー別内訳の行
    pub fn breakdown_line(&self) -> String {
        let amounts: Vec<String> = self.metrics.amounts.iter().map(i64::to_string).collect();
        format!("Per-worker: [{}]", amounts.join(" "))
    }
}
