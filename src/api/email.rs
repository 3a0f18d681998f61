use actix_web::{web, HttpResponse};
use crate::api::{invalid_request, server_error};
use crate::models::{EmailRequest, NotificationEmailRequest, WelcomeEmailRequest};
use crate::services::EmailService;

#[utoipa::path(
    post,
    path = "/send-email",
    tag = "Email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email accepted by the provider"),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Provider or configuration failure")
    )
)]
pub async fn send_email(
    email: web::Data<EmailService>,
    request: web::Json<EmailRequest>,
) -> HttpResponse {
    log::info!("📧 POST /send-email - to: {}", request.to_email);

    let to_email = match request.validate() {
        Ok(address) => address,
        Err(e) => return invalid_request(e),
    };

    match email
        .send_email(&to_email, &request.subject, &request.message, &request.from_name)
        .await
    {
        Ok(result) => {
            log::info!("✅ Email sent to {}", to_email);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Email sent successfully",
                "result": result
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to send email to {}: {}", to_email, e);
            server_error("Failed to send email", e)
        }
    }
}

/// Email automático de boas-vindas
#[utoipa::path(
    post,
    path = "/send-welcome-email",
    tag = "Email",
    request_body = WelcomeEmailRequest,
    responses(
        (status = 200, description = "Welcome email accepted by the provider"),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Provider or configuration failure")
    )
)]
pub async fn send_welcome_email(
    email: web::Data<EmailService>,
    request: web::Json<WelcomeEmailRequest>,
) -> HttpResponse {
    log::info!("🎉 POST /send-welcome-email - to: {}", request.to_email);

    let to_email = match request.validate() {
        Ok(address) => address,
        Err(e) => return invalid_request(e),
    };

    match email.send_welcome_email(&to_email, &request.user_name).await {
        Ok(result) => {
            log::info!("✅ Welcome email sent to {}", to_email);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Welcome email sent successfully",
                "result": result
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to send welcome email to {}: {}", to_email, e);
            server_error("Failed to send welcome email", e)
        }
    }
}

/// Notificação com prioridade (Low, Medium, High, Critical)
#[utoipa::path(
    post,
    path = "/send-notification-email",
    tag = "Email",
    request_body = NotificationEmailRequest,
    responses(
        (status = 200, description = "Notification accepted by the provider"),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Provider or configuration failure")
    )
)]
pub async fn send_notification_email(
    email: web::Data<EmailService>,
    request: web::Json<NotificationEmailRequest>,
) -> HttpResponse {
    log::info!(
        "🔔 POST /send-notification-email - to: {}, priority: {}",
        request.to_email,
        request.priority
    );

    let to_email = match request.validate() {
        Ok(address) => address,
        Err(e) => return invalid_request(e),
    };

    match email
        .send_notification_email(
            &to_email,
            &request.notification_type,
            &request.message,
            &request.priority,
        )
        .await
    {
        Ok(result) => {
            log::info!("✅ Notification sent to {}", to_email);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Notification email sent successfully",
                "result": result
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to send notification to {}: {}", to_email, e);
            server_error("Failed to send notification email", e)
        }
    }
}
