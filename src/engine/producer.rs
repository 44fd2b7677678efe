// Producer - 連番の生成と配信

use crate::core::SequenceItem;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Producer: 1から始まる連番を共有キューに送る
///
/// 送信枠の確保とキャンセルを競合させ、キャンセルが先なら送信途中の値は捨てる。
/// 送信成功直後に `on_emit` を1回だけ呼ぶ。終了時に `work_tx` がドロップされ、
/// 共有キューが閉じる。
pub fn spawn_producer<F>(
    work_tx: mpsc::Sender<SequenceItem>,
    cancel: CancellationToken,
    mut on_emit: F,
) -> tokio::task::JoinHandle<()>
where
    F: FnMut(SequenceItem) + Send + 'static,
{
    tokio::spawn(async move {
        let mut next: SequenceItem = 1;

        loop {
            let permit = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                reserved = work_tx.reserve() => match reserved {
                    Ok(permit) => permit,
                    // 受信側が全て閉じられた場合も終了
                    Err(_) => break,
                },
            };

            permit.send(next);
            on_emit(next);
            next += 1;
        }
    })
}
