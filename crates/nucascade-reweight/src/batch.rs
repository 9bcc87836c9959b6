//! Parallel reweighting of event batches.
//!
//! Workers pull `(index, record)` tasks from a shared channel and send the
//! reweighted record back tagged with its index, so output order matches
//! input order regardless of scheduling.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use nucascade_core::EventRecord;
use tracing::debug;

use crate::table::FateWeightTable;

type Task = (usize, EventRecord);

/// Runs until the task channel is closed (sender dropped).
fn worker_loop(table: Arc<FateWeightTable>, tasks: Receiver<Task>, results: Sender<Task>) {
    while let Ok((index, mut record)) = tasks.recv() {
        let weight = table.event_weight(&record);
        record.set_weight(weight);
        // The collector only goes away once every task has been answered.
        let _ = results.send((index, record));
    }
}

/// Reweight `events` on `workers` threads sharing `table`, preserving order.
///
/// `workers` is clamped to `1..=events.len()`. A panicking worker is
/// re-raised on the calling thread.
pub fn reweight_batch(
    table: &Arc<FateWeightTable>,
    events: Vec<EventRecord>,
    workers: usize,
) -> Vec<EventRecord> {
    let n = events.len();
    let workers = workers.clamp(1, n.max(1));
    debug!(events = n, workers, "reweighting batch");

    let (task_tx, task_rx) = crossbeam_channel::bounded::<Task>(workers * 2);
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<Task>();

    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let table = Arc::clone(table);
            let rx = task_rx.clone();
            let tx = result_tx.clone();
            thread::spawn(move || worker_loop(table, rx, tx))
        })
        .collect();
    drop(task_rx);
    drop(result_tx);

    let mut slots: Vec<Option<EventRecord>> = Vec::with_capacity(n);
    slots.resize_with(n, || None);

    // Feed and drain concurrently so a bounded task queue cannot stall.
    let feeder = thread::spawn(move || {
        for task in events.into_iter().enumerate() {
            if task_tx.send(task).is_err() {
                break;
            }
        }
    });
    for (index, record) in result_rx.iter() {
        slots[index] = Some(record);
    }

    for h in std::iter::once(feeder).chain(handles) {
        if let Err(panic) = h.join() {
            std::panic::resume_unwind(panic);
        }
    }

    slots.into_iter().flatten().collect()
}
