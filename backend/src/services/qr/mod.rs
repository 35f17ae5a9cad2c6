//! QR helper endpoints under `/api/qr`.
//!
//! Image rendering is delegated entirely to the public qrserver.com API;
//! this module only builds the URLs and proxies the PNG bytes so the
//! dashboard gets a same-origin download.

mod download;
mod generate;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/api/qr";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("/{intern_id}", web::get().to(generate::process))
        .route("/{intern_id}/download", web::get().to(download::process))
}
