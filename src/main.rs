mod api;
mod config;
mod database;
mod models;
mod services;
mod state;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::database::MongoDB;
use crate::models::{Alumni, College, EntityKind, Student};
use crate::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("🚀 Starting Campus Accounts Service...");

    // Initialize MongoDB connection
    let db = match MongoDB::new(&config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ Error connecting to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("✅ MongoDB connected successfully");

    if let Err(e) = db
        .ensure_indexes(&[Alumni::COLLECTION, College::COLLECTION, Student::COLLECTION])
        .await
    {
        log::warn!("⚠️  Index setup failed: {}", e);
    }

    let state = web::Data::new(AppState::new(Arc::new(db)));

    let (host, port) = config.bind_address();
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // Open to every origin
        let cors = Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            .configure(api::configure)
    })
    .bind((host, port))?
    .shutdown_timeout(30)
    .run()
    .await?;

    log::info!("👋 Server stopped, closing MongoDB connections");

    Ok(())
}
