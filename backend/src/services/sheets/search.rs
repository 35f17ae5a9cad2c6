//! Public certificate lookup: `GET /api/sheets?q=<query>`.
//!
//! Mirrors what the verification page needs: one best match. A well-formed
//! 6-digit query is treated as an id and tried for an exact match before
//! falling back to the substring search, whose first hit wins.

use actix_web::{web, HttpResponse, Responder};
use common::model::intern::InternRecord;
use common::responses::ApiResponse;
use log::error;
use regex::Regex;
use serde::Deserialize;

use crate::error::AppError;
use crate::records::service::RecordService;

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

pub async fn process(
    service: web::Data<RecordService>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let Some(query) = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    else {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<InternRecord>::fail("Search query is required"));
    };

    match find_intern(&service, query).await {
        Ok(Some(intern)) => HttpResponse::Ok().json(ApiResponse::ok(intern)),
        Ok(None) => {
            HttpResponse::NotFound().json(ApiResponse::<InternRecord>::fail("No intern found"))
        }
        Err(e) => {
            error!("Error searching interns: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::<InternRecord>::fail(
                "Failed to search interns. Please check your Google Sheets configuration.",
            ))
        }
    }
}

async fn find_intern(
    service: &RecordService,
    query: &str,
) -> Result<Option<InternRecord>, AppError> {
    let looks_like_id = Regex::new(r"^\d{6}$")
        .map(|re| re.is_match(query))
        .unwrap_or(false);
    if looks_like_id {
        if let Some(intern) = service.get_by_id(query).await? {
            return Ok(Some(intern));
        }
    }

    Ok(service.search(query).await?.into_iter().next())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::records::store::testing::InMemoryStore;

    async fn seeded_service() -> RecordService {
        let service = RecordService::new(Arc::new(InMemoryStore::default()));
        let record = InternRecord {
            id: "123456".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..InternRecord::default()
        };
        service.add(record).await.unwrap();
        service
    }

    async fn get(path: &str) -> (u16, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_service().await))
                .service(crate::services::sheets::configure_routes()),
        )
        .await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        let status = response.status().as_u16();
        (status, test::read_body_json(response).await)
    }

    #[actix_web::test]
    async fn missing_query_is_rejected() {
        let (status, body) = get("/api/sheets").await;
        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Search query is required");
    }

    #[actix_web::test]
    async fn six_digit_query_finds_by_id() {
        let (status, body) = get("/api/sheets?q=123456").await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "123456");
    }

    #[actix_web::test]
    async fn name_query_falls_back_to_substring_search() {
        let (status, body) = get("/api/sheets?q=jane").await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["name"], "Jane Doe");
    }

    #[actix_web::test]
    async fn unmatched_query_is_not_found() {
        let (status, body) = get("/api/sheets?q=000000").await;
        assert_eq!(status, 404);
        assert_eq!(body["message"], "No intern found");
    }
}
