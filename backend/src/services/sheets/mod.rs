//! Intern record endpoints under `/api/sheets`.
//!
//! ## Registered routes:
//!
//! *   **`GET ?q=<query>`** - public certificate lookup. A 6-digit numeric
//!     query is tried as an exact id first, then as a substring search;
//!     returns the single best match.
//! *   **`POST`** - creates an intern record with a server-generated
//!     6-digit id.
//! *   **`GET /interns`** - lists every stored record.
//! *   **`DELETE /interns/{id}`** - removes one record by id.

mod create;
mod delete;
mod list;
mod search;

use actix_web::web;
use actix_web::Scope;

const API_PATH: &str = "/api/sheets";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(search::process))
        .route("", web::post().to(create::process))
        .route("/interns", web::get().to(list::process))
        .route("/interns/{id}", web::delete().to(delete::process))
}
