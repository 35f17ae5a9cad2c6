//! Certificate job scheduling: `POST /api/certificates/start`.
//!
//! Validates the intern and template, registers a job as `Pending`, and
//! immediately returns the job id for status polling. The spawned worker
//! only simulates composition: it sleeps through the work window while
//! reporting progress, then completes with the unchanged template's
//! download URL.

use std::time::Duration;

use actix_web::{web, HttpResponse, Responder};
use common::jobs::JobStatus;
use common::requests::StartCertificateRequest;
use common::responses::{ApiResponse, CertificateScheduled};
use log::{error, info};
use uuid::Uuid;

use crate::config::Config;
use crate::job_controller::state::{JobUpdate, JobsState};
use crate::records::service::RecordService;
use crate::services::certificates::store::TemplateStore;

const COMPOSITION_STEPS: u32 = 3;
const COMPOSITION_STEP_DELAY: Duration = Duration::from_secs(1);

pub async fn process(
    state: web::Data<JobsState>,
    service: web::Data<RecordService>,
    store: web::Data<TemplateStore>,
    config: web::Data<Config>,
    payload: web::Json<StartCertificateRequest>,
) -> impl Responder {
    let request = payload.into_inner();

    if store.path_of(&request.template_id).is_none() {
        return HttpResponse::NotFound().json(ApiResponse::<CertificateScheduled>::fail(
            "Certificate template not found",
        ));
    }

    let intern = match service.get_by_id(&request.intern_id).await {
        Ok(Some(intern)) => intern,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ApiResponse::<CertificateScheduled>::fail("Intern not found"))
        }
        Err(e) => {
            error!("Error fetching intern for certificate: {e}");
            return HttpResponse::InternalServerError().json(
                ApiResponse::<CertificateScheduled>::fail(
                    "Failed to fetch intern data. Please check your Google Sheets configuration.",
                ),
            );
        }
    };

    let download_url = format!(
        "{}/api/certificates/template/{}",
        config.public_base_url.trim_end_matches('/'),
        request.template_id
    );
    let job_id = schedule_certificate_job(&state, download_url, intern.name).await;

    HttpResponse::Ok().json(ApiResponse::ok(CertificateScheduled { job_id }))
}

/// Registers the job as `Pending` and spawns the simulated worker. The
/// worker reports stepwise progress through the job channel and never
/// touches the job map directly.
async fn schedule_certificate_job(
    state: &JobsState,
    download_url: String,
    intern_name: String,
) -> String {
    let job_id = Uuid::new_v4().to_string();
    state
        .jobs
        .write()
        .await
        .insert(job_id.clone(), JobStatus::Pending);

    let tx = state.tx.clone();
    let worker_job_id = job_id.clone();
    tokio::spawn(async move {
        // Composition (text + QR overlay on the template) is not built;
        // sleep through the window it would take and hand back the
        // template unchanged.
        for step in 1..=COMPOSITION_STEPS {
            tokio::time::sleep(COMPOSITION_STEP_DELAY).await;
            let progress = step * 100 / COMPOSITION_STEPS;
            let _ = tx
                .send(JobUpdate::new(
                    worker_job_id.clone(),
                    JobStatus::InProgress(progress),
                ))
                .await;
        }

        info!("Certificate ready for {intern_name}");
        let _ = tx
            .send(JobUpdate::new(
                worker_job_id,
                JobStatus::Completed(download_url),
            ))
            .await;
    });

    job_id
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use tokio::sync::{mpsc, RwLock};

    use super::*;

    #[actix_web::test]
    async fn scheduled_job_starts_pending_and_completes_with_template_url() {
        let (tx, mut rx) = mpsc::channel(16);
        let state = JobsState {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            tx,
        };

        let job_id = schedule_certificate_job(
            &state,
            "http://127.0.0.1:8080/api/certificates/template/tpl-1".to_string(),
            "Jane Doe".to_string(),
        )
        .await;

        assert!(matches!(
            state.jobs.read().await.get(&job_id),
            Some(JobStatus::Pending)
        ));

        // Drop our sender half so the channel closes once the worker is
        // done, then drain its updates directly; the updater task is not
        // running in this test.
        let JobsState { jobs: _, tx } = state;
        drop(tx);
        let mut last = None;
        while let Some(update) = rx.recv().await {
            last = Some(update.status);
        }
        match last {
            Some(JobStatus::Completed(url)) => {
                assert!(url.ends_with("/api/certificates/template/tpl-1"));
            }
            other => panic!("expected completed job, got {other:?}"),
        }
    }
}
