//! Shared state for background certificate-generation jobs.
//!
//! Jobs run outside the request/response cycle; clients poll
//! `/api/certificates/status/{job_id}` while a spawned worker reports
//! progress. Workers never write the job map directly: they push
//! `JobUpdate` messages into an mpsc channel drained by the single
//! `start_job_updater` task, which owns all writes.

use std::{collections::HashMap, sync::Arc};

use common::jobs::JobStatus;
use tokio::sync::{mpsc, RwLock};

/// Thread-safe container for the status of all jobs, injected into the
/// Actix application state. Reads (status polling) take the lock shared;
/// only the updater task takes it exclusively.
#[derive(Clone)]
pub struct JobsState {
    pub jobs: Arc<RwLock<HashMap<String, JobStatus>>>,
    pub tx: mpsc::Sender<JobUpdate>,
}

/// One status change for one job, sent by a worker via `JobsState.tx`.
#[derive(Debug)]
pub struct JobUpdate {
    pub(crate) job_id: String,
    pub(crate) status: JobStatus,
}

impl JobUpdate {
    pub fn new(job_id: String, status: JobStatus) -> Self {
        Self { job_id, status }
    }
}

/// Drains `rx` and applies each update to the shared job map. Spawned once
/// at startup and runs for the lifetime of the server.
pub async fn start_job_updater(state: JobsState, mut rx: mpsc::Receiver<JobUpdate>) {
    while let Some(update) = rx.recv().await {
        let mut jobs = state.jobs.write().await;
        jobs.insert(update.job_id.clone(), update.status);
    }
}
