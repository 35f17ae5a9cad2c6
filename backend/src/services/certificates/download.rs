//! Stored template serving: `GET /api/certificates/template/{template_id}`.
//!
//! Completed generation jobs point here, so until real composition exists
//! this is also the "generated certificate" download.

use std::fs;

use actix_web::{web, HttpResponse, Responder};
use common::responses::ApiResponse;
use log::error;
use mime_guess::from_path;

use crate::services::certificates::store::TemplateStore;

pub async fn process(
    store: web::Data<TemplateStore>,
    template_id: web::Path<String>,
) -> impl Responder {
    let Some(path) = store.path_of(&template_id) else {
        return HttpResponse::NotFound()
            .json(ApiResponse::<()>::fail("Certificate template not found"));
    };

    match fs::read(&path) {
        Ok(bytes) => {
            let mime = from_path(&path).first_or_octet_stream();
            HttpResponse::Ok().content_type(mime.as_ref()).body(bytes)
        }
        Err(e) => {
            error!("Error reading certificate template {}: {e}", path.display());
            HttpResponse::InternalServerError().json(ApiResponse::<()>::fail(
                "Failed to read certificate template. Please try again.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn stored_template_is_served_with_its_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        let id = store.save(b"fake png bytes", "png").unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(crate::services::certificates::configure_routes()),
        )
        .await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/certificates/template/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 200);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap()
            .to_string();
        assert_eq!(content_type, "image/png");
        assert_eq!(
            test::read_body(response).await.as_ref(),
            &b"fake png bytes"[..]
        );
    }

    #[actix_web::test]
    async fn unknown_template_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TemplateStore::new(dir.path())))
                .service(crate::services::certificates::configure_routes()),
        )
        .await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/certificates/template/ghost")
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 404);
    }
}
