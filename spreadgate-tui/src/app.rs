//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels;
//! the snapshot it sends back is the only market data the UI ever holds.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use spreadgate_core::advisory::{self, CreditAdvisory};
use spreadgate_core::config::DashboardConfig;
use spreadgate_core::snapshot::Snapshot;

use crate::worker::{WorkerCommand, WorkerResponse};

/// Credit moves in one-cent steps.
pub const CREDIT_STEP: f64 = 0.01;

const ERROR_HISTORY_CAP: usize = 50;

/// Which overlay, if any, sits on top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One entry in the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: String,
    pub message: String,
}

pub struct AppState {
    pub running: bool,
    pub config: DashboardConfig,
    pub snapshot: Option<Snapshot>,
    pub refresh_in_progress: bool,
    /// Set when the most recent refresh failed; drives the retry banner.
    pub last_refresh_error: Option<String>,
    pub credit: f64,
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
}

impl AppState {
    pub fn new(
        config: DashboardConfig,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
    ) -> Self {
        let credit = config.credit_default;
        Self {
            running: true,
            config,
            snapshot: None,
            refresh_in_progress: false,
            last_refresh_error: None,
            credit,
            status_message: None,
            error_history: VecDeque::new(),
            error_scroll: 0,
            overlay: Overlay::None,
            worker_tx,
            worker_rx,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Info));
    }

    pub fn push_error(&mut self, category: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        self.status_message = Some((message.clone(), StatusLevel::Error));
        self.error_history.push_front(ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category: category.into(),
            message,
        });
        self.error_history.truncate(ERROR_HISTORY_CAP);
    }

    /// Ask the worker for a fresh snapshot. No-op while one is in flight.
    pub fn request_refresh(&mut self) {
        if self.refresh_in_progress {
            return;
        }
        self.refresh_in_progress = true;
        self.set_status("Refreshing...");
        let _ = self.worker_tx.send(WorkerCommand::Refresh);
    }

    /// Move the credit input by whole cent steps, clamped to the widget
    /// range.
    pub fn adjust_credit(&mut self, steps: i32) {
        let moved = self.credit + f64::from(steps) * CREDIT_STEP;
        // Snap to cents so repeated stepping cannot drift.
        let cents = (moved * 100.0).round() / 100.0;
        self.credit = advisory::clamp_credit(cents);
    }

    pub fn advisory(&self) -> CreditAdvisory {
        advisory::evaluate_credit(self.credit, &self.config)
    }
}
