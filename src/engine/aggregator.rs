// Aggregator - 複数キューを1本に束ねるファンイン

use crate::core::{PipelineError, PipelineResult, SequenceItem};
use std::sync::Arc;
use tokio::sync::mpsc;

/// ファンインの結果
pub struct FanIn {
    /// 全ワーカーの出力を束ねた結合キュー
    pub output: mpsc::Receiver<SequenceItem>,
    /// 全排出タスクのjoin後に完了する監督タスク
    pub handle: tokio::task::JoinHandle<PipelineResult<()>>,
}

/// 入力キューごとに排出タスクを起動し、結合キューへ転送する
///
/// 転送成功のたびに `on_forward(入力のインデックス)` を1回呼ぶ。
/// 結合キューは全ての排出タスクが終わった後、監督タスクが最後の送信側を
/// ドロップした時点で1度だけ閉じる。容量は入力数未満にはしない。
pub fn fan_in<F>(inputs: Vec<mpsc::Receiver<SequenceItem>>, capacity: usize, on_forward: F) -> FanIn
where
    F: Fn(usize) + Send + Sync + 'static,
{
    let capacity = capacity.max(inputs.len()).max(1);
    let (combined_tx, combined_rx) = mpsc::channel::<SequenceItem>(capacity);
    let on_forward = Arc::new(on_forward);

    let drains: Vec<_> = inputs
        .into_iter()
        .enumerate()
        .map(|(input_no, input)| {
            spawn_drain(input_no, input, combined_tx.clone(), Arc::clone(&on_forward))
        })
        .collect();

    let handle = tokio::spawn(async move {
        let mut failure = None;
        for drain in drains {
            if let Err(e) = drain.await {
                failure.get_or_insert(e);
            }
        }

        // 全排出タスクの終了後に結合キューを閉じる
        drop(combined_tx);

        match failure {
            Some(e) => Err(PipelineError::task(e)),
            None => Ok(()),
        }
    });

    FanIn {
        output: combined_rx,
        handle,
    }
}

/// 単一入力の排出タスク
fn spawn_drain<F>(
    input_no: usize,
    mut input: mpsc::Receiver<SequenceItem>,
    combined_tx: mpsc::Sender<SequenceItem>,
    on_forward: Arc<F>,
) -> tokio::task::JoinHandle<()>
where
    F: Fn(usize) + Send + Sync + 'static,
{
    tokio::spawn(async move {
        while let Some(value) = input.recv().await {
            if combined_tx.send(value).await.is_err() {
                // 結合キューの受信側が閉じられた場合は終了
                break;
            }
            on_forward(input_no);
        }
    })
}
