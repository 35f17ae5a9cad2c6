//! Certificate endpoints under `/api/certificates`.
//!
//! The actual image composition (overlaying intern details and a QR code
//! onto the uploaded template) is not built; `start` schedules a job that
//! simulates the work and completes with the unchanged template. Keeping
//! the job plumbing real means the dashboard's upload/poll/download flow
//! works end to end while composition stays a clearly separate, unbuilt
//! piece.
//!
//! ## Registered routes:
//!
//! *   **`POST /template`** - multipart upload of a template image.
//! *   **`POST /start`** - schedules a generation job for an intern.
//! *   **`GET /status/{job_id}`** - polls a scheduled job.
//! *   **`GET /template/{template_id}`** - serves stored template bytes
//!     (also the download URL a completed job reports).

mod download;
mod start;
mod status;
pub mod store;
mod upload;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/api/certificates";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("/template", web::post().to(upload::process))
        .route("/start", web::post().to(start::process))
        .route("/status/{job_id}", web::get().to(status::process))
        .route("/template/{template_id}", web::get().to(download::process))
}
