use actix_web::{web, HttpResponse};
use crate::api::{invalid_request, server_error};
use crate::models::{PublicUser, WelcomeEmailRequest};
use crate::services::{EmailService, SignupOutcome, UserStore};
use crate::utils::AppError;

/// POST /user-signup - cadastra o usuário e dispara o email de boas-vindas
#[utoipa::path(
    post,
    path = "/user-signup",
    tag = "Users",
    request_body = WelcomeEmailRequest,
    responses(
        (status = 200, description = "User stored and welcomed, or already existed (already_existed = true)"),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Storage or email failure")
    )
)]
pub async fn user_signup(
    store: web::Data<UserStore>,
    email: web::Data<EmailService>,
    request: web::Json<WelcomeEmailRequest>,
) -> HttpResponse {
    log::info!("👤 POST /user-signup - email: {}", request.to_email);

    let to_email = match request.validate() {
        Ok(address) => address,
        Err(e) => return invalid_request(e),
    };

    match signup(&store, &email, &to_email, &request.user_name).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            log::error!("❌ Signup failed for {}: {}", to_email, e);
            server_error("Signup failed", e)
        }
    }
}

// O registro é gravado antes do envio; falha no email não desfaz o cadastro
async fn signup(
    store: &UserStore,
    email: &EmailService,
    to_email: &str,
    user_name: &str,
) -> Result<serde_json::Value, AppError> {
    let user = match store.signup(to_email, user_name).await? {
        SignupOutcome::Existing(user) => {
            return Ok(serde_json::json!({
                "success": false,
                "message": "User already exists.",
                "user_id": user.get("id"),
                "user_email": user.get("email"),
                "already_existed": true
            }));
        }
        SignupOutcome::Created(user) => user,
    };

    let result = email.send_welcome_email(to_email, user_name).await?;

    log::info!("✅ User {} signed up", to_email);

    Ok(serde_json::json!({
        "success": true,
        "message": format!("User {} signed up successfully! Welcome email sent.", user_name),
        "user_id": user.get("id"),
        "user_email": to_email,
        "signup_time": user.get("signup_time"),
        "email_result": result,
        "stored": true
    }))
}

/// GET /users - lista pública (id, email, name, signup_time)
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Registered users", body = Vec<PublicUser>),
        (status = 500, description = "User file could not be read")
    )
)]
pub async fn get_users(store: web::Data<UserStore>) -> HttpResponse {
    log::info!("📋 GET /users");

    match store.list_public().await {
        Ok(users) => {
            log::info!("✅ Returning {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to load users: {}", e);
            server_error("Failed to load users", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::email_service::fake::RecordingSender;
    use crate::services::user_store::testing::temp_users_file;
    use crate::services::{EmailService, SendGridClient, UserStore};
    use crate::utils::SendGridConfig;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn signup_request(email: &str, name: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/user-signup")
            .set_json(json!({ "to_email": email, "user_name": name }))
    }

    #[actix_web::test]
    async fn test_signup_twice_reports_already_existed() {
        let sender = Arc::new(RecordingSender::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(EmailService::new(sender.clone())))
                .app_data(web::Data::new(UserStore::new(temp_users_file())))
                .configure(crate::api::configure),
        )
        .await;

        let first: Value = test::call_and_read_body_json(&app, signup_request("lia@example.com", "Lia").to_request()).await;
        assert_eq!(first["success"], true);
        assert_eq!(first["stored"], true);
        assert_eq!(first["message"], "User Lia signed up successfully! Welcome email sent.");
        assert_eq!(first["email_result"]["status_code"], 202);

        let second: Value = test::call_and_read_body_json(&app, signup_request("lia@example.com", "Lia").to_request()).await;
        assert_eq!(second["success"], false);
        assert_eq!(second["already_existed"], true);
        assert_eq!(second["message"], "User already exists.");
        assert_eq!(second["user_id"], first["user_id"]);

        // somente o primeiro cadastro envia boas-vindas
        assert_eq!(sender.sent().len(), 1);
    }

    #[actix_web::test]
    async fn test_signup_same_mailbox_with_different_domain_case() {
        let sender = Arc::new(RecordingSender::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(EmailService::new(sender.clone())))
                .app_data(web::Data::new(UserStore::new(temp_users_file())))
                .configure(crate::api::configure),
        )
        .await;

        let first: Value = test::call_and_read_body_json(&app, signup_request("lia@example.com", "Lia").to_request()).await;
        assert_eq!(first["user_email"], "lia@example.com");

        let second: Value = test::call_and_read_body_json(&app, signup_request("lia@EXAMPLE.com", "Lia").to_request()).await;
        assert_eq!(second["already_existed"], true);
        assert_eq!(second["user_email"], "lia@example.com");
        assert_eq!(sender.sent().len(), 1);
    }

    #[actix_web::test]
    async fn test_users_exposes_only_public_fields() {
        let path = temp_users_file();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"[{"id": "u1", "email": "a@example.com", "name": "A", "signup_time": "2024-01-01T00:00:00", "password_hash": "x", "token": "y"}]"#,
        )
        .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UserStore::new(&path)))
                .configure(crate::api::configure),
        )
        .await;

        let users: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/users").to_request()).await;
        let users = users.as_array().unwrap();
        assert_eq!(users.len(), 1);

        let mut keys: Vec<&str> = users[0].as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "id", "name", "signup_time"]);
    }

    #[actix_web::test]
    async fn test_users_empty_when_no_file() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UserStore::new(temp_users_file())))
                .configure(crate::api::configure),
        )
        .await;

        let users: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/users").to_request()).await;
        assert_eq!(users, json!([]));
    }

    #[actix_web::test]
    async fn test_signup_email_failure_keeps_record() {
        let store = web::Data::new(UserStore::new(temp_users_file()));
        let client = SendGridClient::new(SendGridConfig::default()).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(EmailService::new(Arc::new(client))))
                .app_data(store.clone())
                .configure(crate::api::configure),
        )
        .await;

        let resp = test::call_service(&app, signup_request("kai@example.com", "Kai").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["detail"],
            "Signup failed: SENDGRID_API_KEY not found in environment variables"
        );

        let users = store.list_public().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "kai@example.com");
    }
}
