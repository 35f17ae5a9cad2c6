use actix_web::{web, HttpResponse, Responder};
use common::responses::ApiResponse;
use log::error;

use crate::config::Config;
use crate::error::AppError;
use crate::services::qr::generate::{is_intern_id, qr_links};

pub async fn process(config: web::Data<Config>, intern_id: web::Path<String>) -> impl Responder {
    let intern_id = intern_id.into_inner();
    if !is_intern_id(&intern_id) {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::fail("Intern ID must be exactly 6 digits"));
    }

    let links = qr_links(&config.public_base_url, &intern_id);
    match fetch_png(&links.qr_url).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("image/png")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"qr-code-intern-{intern_id}.png\""),
            ))
            .body(bytes),
        Err(e) => {
            error!("Error downloading QR code: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::<()>::fail(
                "Failed to download QR code. Please try again.",
            ))
        }
    }
}

async fn fetch_png(url: &str) -> Result<Vec<u8>, AppError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| AppError::Upstream(format!("QR image request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "QR image request rejected with status {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Upstream(format!("unreadable QR image response: {e}")))?;
    Ok(bytes.to_vec())
}
