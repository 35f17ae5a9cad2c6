use actix_web::{web, HttpResponse, Responder};
use common::responses::{ApiResponse, QrLinks};
use regex::Regex;
use reqwest::Url;

use crate::config::Config;

const QR_IMAGE_API: &str = "https://api.qrserver.com/v1/create-qr-code/";

pub(super) fn is_intern_id(candidate: &str) -> bool {
    Regex::new(r"^\d{6}$")
        .map(|re| re.is_match(candidate))
        .unwrap_or(false)
}

/// Builds the public profile URL for an intern and the third-party image
/// URL that renders it as a 300x300 PNG QR code.
pub(super) fn qr_links(base_url: &str, intern_id: &str) -> QrLinks {
    let profile_url = format!("{}/intern/{intern_id}", base_url.trim_end_matches('/'));
    let qr_url = Url::parse_with_params(
        QR_IMAGE_API,
        &[
            ("size", "300x300"),
            ("format", "png"),
            ("data", profile_url.as_str()),
            ("bgcolor", "FFFFFF"),
            ("color", "000000"),
            ("margin", "10"),
        ],
    )
    .map(String::from)
    .unwrap_or_else(|_| QR_IMAGE_API.to_string());

    QrLinks {
        profile_url,
        qr_url,
    }
}

pub async fn process(config: web::Data<Config>, intern_id: web::Path<String>) -> impl Responder {
    let intern_id = intern_id.into_inner();
    if !is_intern_id(&intern_id) {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<QrLinks>::fail("Intern ID must be exactly 6 digits"));
    }

    HttpResponse::Ok().json(ApiResponse::ok(qr_links(&config.public_base_url, &intern_id)))
}
