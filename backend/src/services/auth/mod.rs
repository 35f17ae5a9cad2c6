mod check;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/api/auth";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH).route("/check", web::get().to(check::process))
}
