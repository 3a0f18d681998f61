use crate::models::email::normalize_email;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Formato do `signup_time` (ISO-8601 sem offset, microssegundos)
pub const SIGNUP_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Registro de usuário exatamente como está no arquivo JSON.
///
/// O objeto é mantido inteiro: campos desconhecidos ou com tipos
/// inesperados (ex.: `"id": 7`) sobrevivem à regravação do arquivo.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

impl UserRecord {
    pub fn new(email: &str, name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(uuid::Uuid::new_v4().to_string()));
        fields.insert("email".to_string(), Value::from(email));
        fields.insert("name".to_string(), Value::from(name));
        fields.insert(
            "signup_time".to_string(),
            Value::from(chrono::Utc::now().format(SIGNUP_TIME_FORMAT).to_string()),
        );
        Self(fields)
    }

    /// Valor do campo, `null` quando ausente
    pub fn get(&self, key: &str) -> Value {
        self.0.get(key).cloned().unwrap_or(Value::Null)
    }

    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// Compara com o endereço já normalizado (domínio em minúsculas)
    pub fn has_email(&self, normalized: &str) -> bool {
        self.email().map(normalize_email).as_deref() == Some(normalized)
    }
}

/// Projeção pública exposta em GET /users
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct PublicUser {
    #[schema(value_type = Option<String>)]
    pub id: Value,
    #[schema(value_type = Option<String>)]
    pub email: Value,
    #[schema(value_type = Option<String>)]
    pub name: Value,
    #[schema(value_type = Option<String>)]
    pub signup_time: Value,
}

impl From<&UserRecord> for PublicUser {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.get("id"),
            email: user.get("email"),
            name: user.get("name"),
            signup_time: user.get("signup_time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_fields() {
        let user = UserRecord::new("ana@example.com", "Ana");
        let id = user.get("id");
        assert!(uuid::Uuid::parse_str(id.as_str().unwrap()).is_ok());
        assert_eq!(user.email(), Some("ana@example.com"));
        assert_eq!(user.get("name"), "Ana");

        let time = user.get("signup_time");
        assert!(chrono::NaiveDateTime::parse_from_str(time.as_str().unwrap(), SIGNUP_TIME_FORMAT).is_ok());
    }

    #[test]
    fn test_public_projection_drops_extra_fields() {
        let raw = serde_json::json!({
            "id": "1",
            "email": "bob@example.com",
            "name": "Bob",
            "signup_time": "2024-01-01T10:00:00.000000",
            "password_hash": "secret"
        });
        let user: UserRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);

        let public = serde_json::to_value(PublicUser::from(&user)).unwrap();
        let keys: Vec<&String> = public.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        assert!(public.get("password_hash").is_none());
    }

    #[test]
    fn test_non_string_values_come_through() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({ "id": 7, "email": "x@example.com" })).unwrap();
        let public = serde_json::to_value(PublicUser::from(&user)).unwrap();
        assert_eq!(public["id"], 7);
        assert_eq!(public["email"], "x@example.com");
        assert_eq!(public["name"], Value::Null);
    }

    #[test]
    fn test_has_email_ignores_domain_case() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({ "email": "Lia@Example.COM" })).unwrap();
        assert!(user.has_email("Lia@example.com"));
        assert!(!user.has_email("lia@example.com"));

        let numeric: UserRecord = serde_json::from_value(serde_json::json!({ "email": 42 })).unwrap();
        assert!(!numeric.has_email("42"));
    }
}
