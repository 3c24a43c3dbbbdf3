//! Background worker thread — network fetches run here.
//!
//! The main thread never blocks on Yahoo: it sends `Refresh` over the
//! channel and keeps drawing; the snapshot (or the failure) comes back
//! whenever the fetch pair completes.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use spreadgate_core::config::DashboardConfig;
use spreadgate_core::data::YahooProvider;
use spreadgate_core::snapshot::Snapshot;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Refresh,
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    SnapshotReady(Box<Snapshot>),
    RefreshFailed { category: String, message: String },
}

/// Spawn the worker. It owns the HTTP client and the calendar; the
/// config is cloned in so both threads see the same thresholds.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    config: DashboardConfig,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("spreadgate-worker".into())
        .spawn(move || worker_loop(rx, tx, config))
        .expect("failed to spawn worker thread")
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, config: DashboardConfig) {
    let provider = YahooProvider::new();
    let calendar = config.calendar();

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Refresh) => {
                let clock = calendar.now();
                let response = match Snapshot::build(&provider, &config, &calendar, clock) {
                    Ok(snapshot) => WorkerResponse::SnapshotReady(Box::new(snapshot)),
                    Err(e) => WorkerResponse::RefreshFailed {
                        category: e.category().into(),
                        message: e.to_string(),
                    },
                };
                if tx.send(response).is_err() {
                    break;
                }
            }
        }
    }
}
