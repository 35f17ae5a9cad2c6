//! Intern creation: `POST /api/sheets`.

use actix_web::{web, HttpResponse, Responder};
use common::model::intern::InternRecord;
use common::requests::CreateInternRequest;
use common::responses::ApiResponse;
use log::error;
use rand::Rng;

use crate::error::AppError;
use crate::records::service::RecordService;

/// Random 6-digit record id. Collisions with already stored ids are not
/// checked before the append.
fn generate_intern_id() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

pub async fn process(
    service: web::Data<RecordService>,
    payload: web::Json<CreateInternRequest>,
) -> impl Responder {
    let record = payload.into_inner().into_record(generate_intern_id());

    match service.add(record).await {
        Ok(stored) => HttpResponse::Ok().json(ApiResponse::ok(stored)),
        Err(AppError::Validation(message)) => {
            HttpResponse::BadRequest().json(ApiResponse::<InternRecord>::fail(message))
        }
        Err(e) => {
            error!("Error creating intern: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::<InternRecord>::fail(
                "Failed to create intern. Please check your Google Sheets configuration.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::records::store::testing::InMemoryStore;

    #[::core::prelude::v1::test]
    fn generated_ids_are_six_digits() {
        for _ in 0..100 {
            let id = generate_intern_id();
            assert_eq!(id.len(), 6);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    async fn post(body: Value) -> (u16, Value) {
        let service = RecordService::new(Arc::new(InMemoryStore::default()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(crate::services::sheets::configure_routes()),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/api/sheets")
            .set_json(body)
            .to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status().as_u16();
        (status, test::read_body_json(response).await)
    }

    #[actix_web::test]
    async fn create_assigns_id_and_created_at() {
        let (status, body) = post(json!({
            "name": "Jane Doe",
            "email": "jane@x.com",
            "internshipFields": [{
                "field": "Backend",
                "mode": "online",
                "startDate": "2024-01-01",
                "endDate": "2024-03-01",
                "projectVideos": []
            }]
        }))
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        let id = body["data"]["id"].as_str().unwrap();
        assert_eq!(id.len(), 6);
        assert!(!body["data"]["createdAt"].as_str().unwrap().is_empty());
        assert_eq!(body["data"]["internshipFields"][0]["mode"], "online");
    }

    #[actix_web::test]
    async fn create_without_email_is_rejected() {
        let (status, body) = post(json!({ "name": "Jane Doe" })).await;
        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
    }
}
