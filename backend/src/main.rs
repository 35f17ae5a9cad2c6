mod config;
mod error;
mod job_controller;
mod records;
mod services;
mod sheets;

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use tokio::sync::{mpsc, RwLock};

use crate::config::Config;
use crate::job_controller::state::JobsState;
use crate::records::service::RecordService;
use crate::services::certificates::store::TemplateStore;
use crate::sheets::SheetsClient;

const TEMPLATE_DIR: &str = "certificate_templates";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let host = "127.0.0.1";
    let port = 8080;

    let record_service = RecordService::new(Arc::new(SheetsClient::new(config.clone())));
    let template_store = TemplateStore::new(TEMPLATE_DIR);

    // Job controller state plus its single-writer updater task.
    let (tx, rx) = mpsc::channel(100);
    let jobs_state = JobsState {
        jobs: Arc::new(RwLock::new(HashMap::new())),
        tx,
    };
    let updater_state = jobs_state.clone();
    tokio::spawn(async move {
        job_controller::state::start_job_updater(updater_state, rx).await;
    });

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(jobs_state.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(record_service.clone()))
            .app_data(web::Data::new(template_store.clone()))
            .service(services::sheets::configure_routes())
            .service(services::auth::configure_routes())
            .service(services::qr::configure_routes())
            .service(services::certificates::configure_routes())
    })
    .bind((host, port))?
    .run()
    .await
}
