//! Certificate job polling: `GET /api/certificates/status/{job_id}`.

use actix_web::{web, HttpResponse, Responder};

use crate::job_controller::state::JobsState;

pub async fn process(job_id: web::Path<String>, state: web::Data<JobsState>) -> impl Responder {
    let jobs = state.jobs.read().await;
    if let Some(status) = jobs.get(&job_id.into_inner()) {
        HttpResponse::Ok().json(status)
    } else {
        HttpResponse::NotFound().body("Job ID not found")
    }
}
