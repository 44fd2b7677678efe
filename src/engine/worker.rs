// Worker - 共有キューから専用キューへのリレー

use crate::core::SequenceItem;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

/// 全ワーカーで共有する入力キュー
pub type SharedReceiver = Arc<Mutex<mpsc::Receiver<SequenceItem>>>;

/// 単一リレーワーカー
///
/// 共有キューから1件取り出して自分の出力キューへそのまま送り、`delay` だけ待つ。
/// 共有キューが閉じて空になると終了し、`out_tx` のドロップで出力キューを閉じる。
pub fn spawn_relay_worker(
    work_rx: SharedReceiver,
    out_tx: mpsc::Sender<SequenceItem>,
    delay: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            // 受信の間だけロックを保持する
            let value = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(value) => value,
                    None => break,
                }
            };

            if out_tx.send(value).await.is_err() {
                // 出力キューの受信側が閉じられた場合は終了
                break;
            }

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    })
}

/// ワーカープール: 出力キューの数だけワーカーを起動
///
/// `outputs[i]` がワーカー `i` の出力キューになる。
pub fn spawn_relay_workers(
    work_rx: mpsc::Receiver<SequenceItem>,
    outputs: Vec<mpsc::Sender<SequenceItem>>,
    delay: Duration,
) -> Vec<tokio::task::JoinHandle<()>> {
    let work_rx = Arc::new(Mutex::new(work_rx));

    outputs
        .into_iter()
        .map(|out_tx| spawn_relay_worker(Arc::clone(&work_rx), out_tx, delay))
        .collect()
}

/// ワーカー数分の専用キューを作成
pub fn worker_channels(
    worker_count: usize,
    capacity: usize,
) -> (Vec<mpsc::Sender<SequenceItem>>, Vec<mpsc::Receiver<SequenceItem>>) {
    (0..worker_count)
        .map(|_| mpsc::channel::<SequenceItem>(capacity.max(1)))
        .unzip()
}
