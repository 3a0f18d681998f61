pub mod email;
pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use crate::utils::AppError;
use actix_web::{error::InternalError, web, HttpResponse};

/// Registra todas as rotas da API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        .route("/send-email", web::post().to(email::send_email))
        .route("/send-welcome-email", web::post().to(email::send_welcome_email))
        .route("/send-notification-email", web::post().to(email::send_notification_email))
        .route("/user-signup", web::post().to(users::user_signup))
        .route("/users", web::get().to(users::get_users));
}

/// Corpo JSON inválido responde 422 no mesmo envelope dos demais erros
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        let detail = err.to_string();
        log::warn!("⚠️  Invalid JSON body on {}: {}", req.path(), detail);
        let response = HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "success": false,
            "message": "Invalid request body",
            "detail": detail
        }));
        InternalError::from_response(err, response).into()
    })
}

/// 422 para payload bem formado mas semanticamente inválido
pub(crate) fn invalid_request(err: AppError) -> HttpResponse {
    log::warn!("⚠️  Rejected request: {}", err);
    HttpResponse::UnprocessableEntity().json(serde_json::json!({
        "success": false,
        "message": "Invalid request body",
        "detail": err.to_string()
    }))
}

/// 500 genérico embutindo o texto do erro
pub(crate) fn server_error(context: &str, err: AppError) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "success": false,
        "message": context,
        "detail": format!("{}: {}", context, err)
    }))
}
