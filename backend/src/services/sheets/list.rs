//! Admin listing: `GET /api/sheets/interns`.

use actix_web::{web, HttpResponse, Responder};
use common::model::intern::InternRecord;
use common::responses::ApiResponse;
use log::error;

use crate::records::service::RecordService;

pub async fn process(service: web::Data<RecordService>) -> impl Responder {
    match service.list_all().await {
        Ok(interns) => HttpResponse::Ok().json(ApiResponse::ok(interns)),
        Err(e) => {
            error!("Error fetching interns: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::<Vec<InternRecord>>::fail(
                "Failed to fetch interns. Please check your Google Sheets configuration.",
            ))
        }
    }
}
