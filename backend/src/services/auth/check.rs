//! Dashboard session probe: `GET /api/auth/check`.
//!
//! Not a session or token scheme: the dashboard is considered logged in
//! iff the `admin-auth` cookie carries the expected opaque value.

use actix_web::{HttpRequest, HttpResponse, Responder};
use common::responses::AuthCheck;

const AUTH_COOKIE: &str = "admin-auth";
const AUTH_VALUE: &str = "authenticated";

pub async fn process(request: HttpRequest) -> impl Responder {
    let authenticated = request
        .cookie(AUTH_COOKIE)
        .map(|cookie| cookie.value() == AUTH_VALUE)
        .unwrap_or(false);

    HttpResponse::Ok().json(AuthCheck { authenticated })
}
