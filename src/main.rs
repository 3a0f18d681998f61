mod api;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::services::{EmailService, SendGridClient, UserStore};
use crate::utils::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    log::info!("🚀 Starting Email Service...");

    // Credenciais só são exigidas no envio; aqui apenas avisamos
    if config.sendgrid.api_key.is_none() {
        log::warn!("⚠️  SENDGRID_API_KEY is not set - email endpoints will fail");
    }
    if config.sendgrid.from_email.is_none() {
        log::warn!("⚠️  FROM_EMAIL is not set - email endpoints will fail");
    }

    let sender = SendGridClient::new(config.sendgrid.clone())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let email_data = web::Data::new(EmailService::new(Arc::new(sender)));
    let store_data = web::Data::new(UserStore::new(config.users_file.clone()));
    log::info!("💾 Users file: {}", store_data.path().display());

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(email_data.clone())
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
