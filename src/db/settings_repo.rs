use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::settings::UserSettings;

// Configurações do usuário em memória. Vive no AppState (não é global),
// então cada instância do servidor e cada teste tem a sua.
#[derive(Clone, Default)]
pub struct SettingsRepository {
    inner: Arc<RwLock<UserSettings>>,
}

impl SettingsRepository {
    pub fn new(initial: UserSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    // Cópia para uso durante uma requisição inteira
    pub async fn get_settings(&self) -> UserSettings {
        self.inner.read().await.clone()
    }

    pub async fn update_settings(&self, settings: UserSettings) -> UserSettings {
        let mut guard = self.inner.write().await;
        *guard = settings;
        guard.clone()
    }
}
