// 整合性チェック - 結合キューの排出と不変条件の検証

use crate::core::{MetricsSnapshot, ObservedTotals, PipelineError, PipelineResult, SequenceItem};
use tokio::sync::mpsc;

/// 結合キューを閉じられるまで読み切り、合計と件数を返す
pub async fn drain_combined(mut combined_rx: mpsc::Receiver<SequenceItem>) -> ObservedTotals {
    let mut observed = ObservedTotals::default();
    while let Some(value) = combined_rx.recv().await {
        observed.observe(value);
    }
    observed
}

/// 記録値と観測値を照合する
///
/// 件数、合計、ワーカー別内訳の順に検証し、最初の不一致を返す。
pub fn verify(snapshot: &MetricsSnapshot, observed: &ObservedTotals) -> PipelineResult<()> {
    if snapshot.input_count != observed.count {
        return Err(PipelineError::CountMismatch {
            recorded: snapshot.input_count,
            observed: observed.count,
        });
    }

    if snapshot.input_sum != observed.sum {
        return Err(PipelineError::SumMismatch {
            recorded: snapshot.input_sum,
            observed: observed.sum,
        });
    }

    let attributed = snapshot.attributed_count();
    if snapshot.input_count - attributed != 0 {
        return Err(PipelineError::PartitionMismatch {
            recorded: snapshot.input_count,
            attributed,
        });
    }

    Ok(())
}
