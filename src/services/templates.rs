use crate::models::RenderedEmail;
use chrono::{DateTime, Utc};

pub const WELCOME_SENDER: &str = "Welcome Bot";
pub const NOTIFICATION_SENDER: &str = "Notification System";

/// Estilo visual de uma prioridade de notificação
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

/// Mapeia o rótulo de prioridade para cor e ícone.
/// Rótulos desconhecidos caem no estilo padrão (cor de Medium, ícone 📢).
pub fn priority_style(priority: &str) -> PriorityStyle {
    match priority {
        "Low" => PriorityStyle { color: "#28a745", icon: "ℹ️" },
        "Medium" => PriorityStyle { color: "#ffc107", icon: "⚠️" },
        "High" => PriorityStyle { color: "#dc3545", icon: "🔴" },
        "Critical" => PriorityStyle { color: "#6f42c1", icon: "🚨" },
        _ => PriorityStyle { color: "#ffc107", icon: "📢" },
    }
}

fn line_breaks(message: &str) -> String {
    message.replace('\n', "<br>")
}

/// Email livre (POST /send-email)
pub fn custom_email(subject: &str, message: &str, from_name: &str, now: DateTime<Utc>) -> RenderedEmail {
    let body = line_breaks(message);
    let sent_at = now.format("%Y-%m-%d %H:%M:%S");

    let html = format!(
        r#"
        <html>
            <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 20px; border-radius: 10px 10px 0 0; color: white;">
                        <h1 style="margin: 0; font-size: 24px;">{subject}</h1>
                    </div>
                    <div style="background-color: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; border: 1px solid #e0e0e0;">
                        <div style="background-color: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
                            {body}
                        </div>
                    </div>
                    <footer style="margin-top: 20px; padding: 20px; text-align: center; color: #666; font-size: 12px; border-top: 1px solid #eee;">
                        <p>Sent from <strong>{from_name}</strong></p>
                        <p>This email was sent at {sent_at} UTC</p>
                    </footer>
                </div>
            </body>
        </html>
        "#
    );

    RenderedEmail {
        subject: subject.to_string(),
        html,
        from_name: from_name.to_string(),
    }
}

/// Boas-vindas para novos usuários
pub fn welcome_email(user_name: &str, now: DateTime<Utc>) -> RenderedEmail {
    let subject = format!("Welcome {}! Your Account is Ready 🎉", user_name);
    let sent_at = now.format("%B %d, %Y at %H:%M");

    let html = format!(
        r#"
    <html>
        <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
            <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                <div style="background: linear-gradient(135deg, #4CAF50 0%, #45a049 100%); padding: 30px; border-radius: 15px 15px 0 0; color: white; text-align: center;">
                    <h1 style="margin: 0; font-size: 28px;">🎉 Welcome {user_name}!</h1>
                    <p style="margin: 10px 0 0 0; font-size: 16px; opacity: 0.9;">Your account is ready to go!</p>
                </div>

                <div style="background-color: #f8f9fa; padding: 40px; border-radius: 0 0 15px 15px; border: 1px solid #e9ecef;">
                    <div style="background-color: white; padding: 30px; border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.1);">
                        <h2 style="color: #4CAF50; margin-top: 0;">Thank you for joining us!</h2>

                        <p>We're excited to have you on board. Your account has been successfully created and is ready to use.</p>

                        <div style="background-color: #e8f5e8; padding: 20px; border-radius: 8px; margin: 20px 0; border-left: 4px solid #4CAF50;">
                            <h3 style="margin-top: 0; color: #2e7d32;">What's next?</h3>
                            <ul style="margin: 10px 0; padding-left: 20px;">
                                <li>✅ Complete your profile setup</li>
                                <li>🎯 Explore our features and tools</li>
                                <li>📞 Contact support if you need help</li>
                                <li>🚀 Start using our platform right away!</li>
                            </ul>
                        </div>

                        <div style="text-align: center; margin: 30px 0;">
                            <a href="https://yourapp.com/dashboard"
                               style="display: inline-block; background-color: #4CAF50; color: white; padding: 15px 30px;
                                      text-decoration: none; border-radius: 25px; font-weight: bold; font-size: 16px;">
                                Get Started Now
                            </a>
                        </div>

                        <p>If you have any questions, feel free to reply to this email or contact our support team.</p>

                        <p>Welcome aboard! 🚀</p>
                    </div>
                </div>

                <footer style="margin-top: 20px; padding: 20px; text-align: center; color: #666; font-size: 12px;">
                    <p>Sent with ❤️ from the <strong>{WELCOME_SENDER}</strong></p>
                    <p>{sent_at} UTC</p>
                    <p style="margin-top: 15px; color: #999;">
                        This is an automated welcome email. If you didn't sign up for our service, please ignore this email.
                    </p>
                </footer>
            </div>
        </body>
    </html>
    "#
    );

    RenderedEmail {
        subject,
        html,
        from_name: WELCOME_SENDER.to_string(),
    }
}

/// Notificação com cor/ícone derivados da prioridade
pub fn notification_email(
    notification_type: &str,
    message: &str,
    priority: &str,
    now: DateTime<Utc>,
) -> RenderedEmail {
    let PriorityStyle { color, icon } = priority_style(priority);
    let subject = format!("{} Notification: {} - {} Priority", icon, notification_type, priority);
    let body = line_breaks(message);
    let notification_id = now.format("%Y%m%d%H%M%S");
    let sent_at = now.format("%Y-%m-%d %H:%M:%S");

    let html = format!(
        r#"
    <html>
        <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
            <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                <div style="background: linear-gradient(135deg, {color} 0%, {color}dd 100%); padding: 25px; border-radius: 10px 10px 0 0; color: white;">
                    <h1 style="margin: 0; font-size: 24px;">{icon} {notification_type}</h1>
                    <p style="margin: 5px 0 0 0; opacity: 0.9;">Priority: <strong>{priority}</strong></p>
                </div>

                <div style="background-color: #f8f9fa; padding: 30px; border-radius: 0 0 10px 10px; border: 1px solid #e9ecef;">
                    <div style="background-color: white; padding: 25px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
                        <div style="background-color: {color}15; border-left: 4px solid {color}; padding: 15px; margin-bottom: 20px;">
                            <h3 style="margin: 0; color: {color};">Notification Details</h3>
                        </div>

                        <div style="margin: 20px 0;">
                            {body}
                        </div>

                        <div style="background-color: #f1f3f4; padding: 15px; border-radius: 5px; margin-top: 20px;">
                            <p style="margin: 0; font-size: 12px; color: #666;">
                                <strong>Notification ID:</strong> {notification_id}<br>
                                <strong>Sent:</strong> {sent_at} UTC<br>
                                <strong>Type:</strong> {notification_type}<br>
                                <strong>Priority:</strong> {priority}
                            </p>
                        </div>
                    </div>
                </div>

                <footer style="margin-top: 20px; padding: 20px; text-align: center; color: #666; font-size: 12px; border-top: 1px solid #eee;">
                    <p>This is an automated notification from the <strong>{NOTIFICATION_SENDER}</strong></p>
                    <p>Please do not reply directly to this email.</p>
                    <p style="margin-top: 10px;">
                        For support, visit our help center or contact support@yourapp.com
                    </p>
                </footer>
            </div>
        </body>
    </html>
    "#
    );

    RenderedEmail {
        subject,
        html,
        from_name: NOTIFICATION_SENDER.to_string(),
    }
}
