//! Admin deletion: `DELETE /api/sheets/interns/{id}`.

use actix_web::{web, HttpResponse, Responder};
use common::responses::ApiResponse;
use log::error;

use crate::records::service::RecordService;

pub async fn process(
    service: web::Data<RecordService>,
    id: web::Path<String>,
) -> impl Responder {
    match service.delete(&id).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            data: None,
            message: Some("Intern deleted successfully".to_string()),
        }),
        Ok(false) => HttpResponse::NotFound().json(ApiResponse::<()>::fail("Intern not found")),
        Err(e) => {
            error!("Error deleting intern: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::<()>::fail(
                "Failed to delete intern. Please check your Google Sheets configuration.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use common::model::intern::InternRecord;
    use serde_json::Value;

    use super::*;
    use crate::records::store::testing::InMemoryStore;

    async fn delete(path: &str, service: RecordService) -> (u16, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(crate::services::sheets::configure_routes()),
        )
        .await;
        let response =
            test::call_service(&app, test::TestRequest::delete().uri(path).to_request()).await;
        let status = response.status().as_u16();
        (status, test::read_body_json(response).await)
    }

    #[actix_web::test]
    async fn deleting_stored_intern_succeeds() {
        let service = RecordService::new(Arc::new(InMemoryStore::default()));
        let record = InternRecord {
            id: "123456".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..InternRecord::default()
        };
        service.add(record).await.unwrap();

        let (status, body) = delete("/api/sheets/interns/123456", service.clone()).await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Intern deleted successfully");
        assert!(service.get_by_id("123456").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn deleting_unknown_intern_is_not_found() {
        let service = RecordService::new(Arc::new(InMemoryStore::default()));
        let (status, body) = delete("/api/sheets/interns/999999", service).await;
        assert_eq!(status, 404);
        assert_eq!(body["message"], "Intern not found");
    }
}
