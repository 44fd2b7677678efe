// 故障注入テスト - 配線のバグを整合性チェックが検出すること
use crate::fixtures::spawn_lossy_relay_worker;
use fan_pipeline::{
    core::{PipelineError, SequenceItem},
    engine::{
        fan_in, spawn_producer, spawn_relay_worker, spawn_relay_workers, worker_channels, FanIn,
    },
    services::{drain_combined, verify, PipelineMetrics},
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

const WORKER_COUNT: usize = 3;
const STOP_AFTER: SequenceItem = 60;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_dropped_item_is_detected() {
    let metrics = Arc::new(PipelineMetrics::new(WORKER_COUNT));
    let cancel = CancellationToken::new();

    let (work_tx, work_rx) = mpsc::channel::<SequenceItem>(1);
    let input_recorder = Arc::clone(&metrics);
    let stopper = cancel.clone();
    let producer_handle = spawn_producer(work_tx, cancel, move |value| {
        input_recorder.record_input(value);
        if value == STOP_AFTER {
            stopper.cancel();
        }
    });

    // ワーカー0だけが最初の1件を捨てる
    let work_rx = Arc::new(Mutex::new(work_rx));
    let (mut outputs, receivers) = worker_channels(WORKER_COUNT, 1);
    let lossy_out = outputs.remove(0);
    let lossy_handle = spawn_lossy_relay_worker(
        Arc::clone(&work_rx),
        lossy_out,
        Duration::from_millis(1),
        1,
    );
    let healthy_handles: Vec<_> = outputs
        .into_iter()
        .map(|out_tx| spawn_relay_worker(Arc::clone(&work_rx), out_tx, Duration::from_millis(1)))
        .collect();
    drop(work_rx);

    let contribution_recorder = Arc::clone(&metrics);
    let FanIn { output, handle, .. } = fan_in(receivers, WORKER_COUNT, move |worker_index| {
        contribution_recorder.record_contribution(worker_index)
    });

    let observed = drain_combined(output).await;

    producer_handle.await.unwrap();
    let dropped = lossy_handle.await.unwrap();
    for worker in healthy_handles {
        worker.await.unwrap();
    }
    handle.await.unwrap().unwrap();

    assert_eq!(dropped.len(), 1, "lossy worker should have dropped one item");

    let error = verify(&metrics.snapshot(), &observed).unwrap_err();
    assert!(error.is_invariant_violation());
    match error {
        PipelineError::CountMismatch { recorded, observed } => {
            assert_eq!(recorded, STOP_AFTER);
            assert_eq!(observed, STOP_AFTER - 1);
        }
        other => panic!("Expected CountMismatch, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_unattributed_item_is_detected() {
    let metrics = Arc::new(PipelineMetrics::new(WORKER_COUNT));
    let cancel = CancellationToken::new();

    let (work_tx, work_rx) = mpsc::channel::<SequenceItem>(1);
    let input_recorder = Arc::clone(&metrics);
    let stopper = cancel.clone();
    let producer_handle = spawn_producer(work_tx, cancel, move |value| {
        input_recorder.record_input(value);
        if value == STOP_AFTER {
            stopper.cancel();
        }
    });

    let (outputs, receivers) = worker_channels(WORKER_COUNT, 1);
    let worker_handles = spawn_relay_workers(work_rx, outputs, Duration::from_millis(1));

    // 最初の1件だけ寄与を記録しそこねる結合側
    let skipped = Arc::new(AtomicBool::new(false));
    let contribution_recorder = Arc::clone(&metrics);
    let FanIn { output, handle, .. } = fan_in(receivers, WORKER_COUNT, move |worker_index| {
        if !skipped.swap(true, Ordering::SeqCst) {
            return;
        }
        contribution_recorder.record_contribution(worker_index)
    });

    let observed = drain_combined(output).await;

    producer_handle.await.unwrap();
    for worker in worker_handles {
        worker.await.unwrap();
    }
    handle.await.unwrap().unwrap();

    let error = verify(&metrics.snapshot(), &observed).unwrap_err();
    assert!(matches!(
        error,
        PipelineError::PartitionMismatch {
            recorded: STOP_AFTER,
            attributed,
        } if attributed == STOP_AFTER - 1
    ));
}

#[tokio::test]
async fn test_inflated_sum_is_detected() {
    let metrics = PipelineMetrics::new(1);
    for value in 1..=10 {
        metrics.record_input(value);
        metrics.record_contribution(0);
    }

    // 件数は同じで値だけ変わったケース
    let (tx, rx) = mpsc::channel::<SequenceItem>(10);
    for value in 1..=10 {
        tx.send(if value == 10 { 11 } else { value }).await.unwrap();
    }
    drop(tx);

    let observed = drain_combined(rx).await;
    let error = verify(&metrics.snapshot(), &observed).unwrap_err();

    assert!(matches!(
        error,
        PipelineError::SumMismatch {
            recorded: 55,
            observed: 56
        }
    ));
}
