use crate::models::{normalize_email, PublicUser, UserRecord};
use crate::utils::AppError;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    Created(UserRecord),
    Existing(UserRecord),
}

/// Lista de usuários em um único arquivo JSON, lida e regravada inteira
/// a cada escrita.
pub struct UserStore {
    path: PathBuf,
    // leituras e o ciclo ler → alterar → gravar passam por aqui
    file_lock: Mutex<()>,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lê todos os registros.
    ///
    /// Arquivo ausente ou que não é JSON válido resulta em lista vazia.
    /// JSON válido que não seja uma lista de objetos é erro, para que a
    /// próxima gravação não destrua o conteúdo.
    pub async fn load(&self) -> Result<Vec<UserRecord>, AppError> {
        let _guard = self.file_lock.lock().await;
        self.read_file().await
    }

    async fn read_file(&self) -> Result<Vec<UserRecord>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let value = match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("⚠️  Could not parse {}: {} (treating as empty)", self.path.display(), e);
                return Ok(Vec::new());
            }
        };

        serde_json::from_value(value).map_err(|e| {
            AppError::Storage(format!(
                "{} is not a list of user objects: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn save(&self, users: &[UserRecord]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(users)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Cadastra o email se ainda não existir (busca linear pelo endereço
    /// normalizado).
    pub async fn signup(&self, email: &str, name: &str) -> Result<SignupOutcome, AppError> {
        let email = normalize_email(email);
        let _guard = self.file_lock.lock().await;

        let mut users = self.read_file().await?;

        if let Some(existing) = users.iter().find(|u| u.has_email(&email)) {
            log::info!("ℹ️  User already exists: {}", email);
            return Ok(SignupOutcome::Existing(existing.clone()));
        }

        let user = UserRecord::new(&email, name);
        users.push(user.clone());
        self.save(&users).await?;

        log::info!("💾 Stored user {} ({} total)", email, users.len());

        Ok(SignupOutcome::Created(user))
    }

    pub async fn list_public(&self) -> Result<Vec<PublicUser>, AppError> {
        let users = self.load().await?;
        Ok(users.iter().map(PublicUser::from).collect())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::PathBuf;

    /// Caminho único em um diretório temporário que ainda não existe
    pub fn temp_users_file() -> PathBuf {
        std::env::temp_dir()
            .join(format!("email-service-test-{}", uuid::Uuid::new_v4()))
            .join("users.json")
    }
}
