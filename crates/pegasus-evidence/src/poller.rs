//! Background refresh of the evidence feed.
//!
//! A cancellable scheduled task rather than an ambient timer: `start`
//! returns a handle owning the loop, and dropping or stopping the handle
//! tears the loop down, so no callback can mutate state after the owning
//! view is gone.

use crate::client::EvidenceClient;
use pegasus_core::IncidentRecord;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Refresh period of the evidence feed
pub const POLL_PERIOD: Duration = Duration::from_secs(10);

pub struct EvidencePoller {
    snapshot: Arc<RwLock<Vec<IncidentRecord>>>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl EvidencePoller {
    /// Start polling. The first fetch is issued immediately, then once per
    /// `period`. A failed cycle is logged and leaves the last successful
    /// snapshot in place (empty before any success); the loop itself never
    /// stops on failure.
    pub fn start(client: EvidenceClient, period: Duration) -> Self {
        let snapshot = Arc::new(RwLock::new(Vec::new()));
        let shared = snapshot.clone();
        let (shutdown, mut stop_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    // Either an explicit stop or the handle being dropped
                    _ = stop_rx.changed() => break,
                    _ = ticker.tick() => match client.fetch_records().await {
                        Ok(records) => {
                            tracing::debug!(count = records.len(), "evidence feed refreshed");
                            *shared.write().unwrap() = records;
                        }
                        Err(e) => tracing::warn!("evidence poll failed: {}", e),
                    },
                }
            }
            tracing::debug!("evidence poller stopped");
        });

        Self { snapshot, shutdown, task }
    }

    /// Last successfully fetched records, newest first
    pub fn snapshot(&self) -> Vec<IncidentRecord> {
        self.snapshot.read().unwrap().clone()
    }

    /// Stop the loop and wait for it to wind down
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
