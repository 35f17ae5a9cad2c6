//! Certificate template upload: `POST /api/certificates/template`.
//!
//! Accepts a multipart form with a single `file` part, verifies the bytes
//! decode as PNG or JPEG before anything touches disk, and returns the
//! generated template id for later `start` requests.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::responses::{ApiResponse, TemplateUploaded};
use futures_util::StreamExt;
use image::ImageFormat;
use log::error;

use crate::error::AppError;
use crate::services::certificates::store::TemplateStore;

pub async fn process(store: web::Data<TemplateStore>, payload: Multipart) -> impl Responder {
    match save_template(&store, payload).await {
        Ok(template_id) => {
            HttpResponse::Ok().json(ApiResponse::ok(TemplateUploaded { template_id }))
        }
        Err(AppError::Validation(message)) => {
            HttpResponse::BadRequest().json(ApiResponse::<TemplateUploaded>::fail(message))
        }
        Err(e) => {
            error!("Error storing certificate template: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::<TemplateUploaded>::fail(
                "Failed to store certificate template. Please try again.",
            ))
        }
    }
}

async fn save_template(store: &TemplateStore, mut payload: Multipart) -> Result<String, AppError> {
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?;

        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if part_name.as_deref() != Some("file") {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| AppError::Validation(format!("broken upload stream: {e}")))?;
            bytes.extend_from_slice(&chunk);
        }

        let extension = match image::guess_format(&bytes) {
            Ok(ImageFormat::Png) => "png",
            Ok(ImageFormat::Jpeg) => "jpg",
            _ => {
                return Err(AppError::Validation(
                    "Certificate template must be a PNG or JPEG image".to_string(),
                ))
            }
        };

        return store.save(&bytes, extension);
    }

    Err(AppError::Validation(
        "Certificate template file is required".to_string(),
    ))
}
