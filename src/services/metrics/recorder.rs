// メトリクス記録 - 生成側と結合側の集計

use crate::core::{MetricsSnapshot, SequenceItem};
use std::sync::atomic::{AtomicI64, Ordering};

/// 生成された値とワーカー別の寄与件数を集計するカウンター群
///
/// 各フィールドは独立したアトミック変数で、ロックは使わない。
/// フィールド間の整合はパイプライン全体が排出し終えた後にのみ成立する。
#[derive(Debug)]
pub struct PipelineMetrics {
    input_sum: AtomicI64,
    input_count: AtomicI64,
    amounts: Vec<AtomicI64>,
}

impl PipelineMetrics {
    /// ワーカー数分の内訳を持つ、全て0のカウンターを作成
    pub fn new(worker_count: usize) -> Self {
        Self {
            input_sum: AtomicI64::new(0),
            input_count: AtomicI64::new(0),
            amounts: (0..worker_count).map(|_| AtomicI64::new(0)).collect(),
        }
    }

    /// Producerが1件送るたびに呼ぶ
    pub fn record_input(&self, value: SequenceItem) {
        self.input_sum.fetch_add(value, Ordering::Relaxed);
        self.input_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 結合側が worker_index の値を1件転送するたびに呼ぶ
    ///
    /// # Panics
    /// worker_index がワーカー数以上の場合
    pub fn record_contribution(&self, worker_index: usize) {
        self.amounts[worker_index].fetch_add(1, Ordering::Relaxed);
    }

    /// 現在値の読み出し（全タスクのjoin後に呼ぶこと）
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            input_sum: self.input_sum.load(Ordering::Acquire),
            input_count: self.input_count.load(Ordering::Acquire),
            amounts: self
                .amounts
                .iter()
                .map(|amount| amount.load(Ordering::Acquire))
                .collect(),
        }
    }
}
