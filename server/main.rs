mod config;
mod error;
mod routes;
mod state;

use actix_web::{middleware, web, App, HttpServer};
use std::io;
use subway_graph::storage::{load_snapshot, MemoryStorage};
use config::ServerConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let storage = match &config.data_file {
        Some(path) => load_snapshot(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        None => MemoryStorage::new(),
    };
    let state = web::Data::new(AppState::new(storage, config.data_file.clone()));

    log::info!("Starting server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
