use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Email Service API",
        version = "1.0.0",
        description = "Transactional email relay backed by SendGrid.\n\n**Features:**\n- Custom, welcome and notification emails rendered from HTML templates\n- User signup with automatic welcome email\n- Flat-file user registry\n- Health monitoring and metrics"
    ),
    paths(
        // Health & Metrics
        crate::api::health::root,
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Email
        crate::api::email::send_email,
        crate::api::email::send_welcome_email,
        crate::api::email::send_notification_email,

        // Users
        crate::api::users::user_signup,
        crate::api::users::get_users,
    ),
    components(
        schemas(
            crate::api::health::RootResponse,
            crate::api::health::HealthResponse,
            crate::models::EmailRequest,
            crate::models::WelcomeEmailRequest,
            crate::models::NotificationEmailRequest,
            crate::models::SendResult,
            crate::models::PublicUser,
        )
    ),
    tags(
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
        (name = "Email", description = "Send custom, welcome and notification emails through the provider."),
        (name = "Users", description = "User signup and the public user list."),
    )
)]
pub struct ApiDoc;
