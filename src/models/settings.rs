// src/models/settings.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_MONTHLY_GOAL: i64 = 100_000;

// Configurações do usuário guardadas em memória
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettings {
    pub gumroad_token: String,
    pub monthly_goal: i64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            gumroad_token: String::new(),
            monthly_goal: DEFAULT_MONTHLY_GOAL,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsRequest {
    #[serde(default)]
    pub gumroad_token: String,
    // A meta não é validada: zero ou negativa passa direto
    pub monthly_goal: i64,
}

impl From<SaveSettingsRequest> for UserSettings {
    fn from(req: SaveSettingsRequest) -> Self {
        Self {
            gumroad_token: req.gumroad_token,
            monthly_goal: req.monthly_goal,
        }
    }
}

// O que o GET devolve: o token nunca sai em texto puro
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub gumroad_token: String,
    pub monthly_goal: i64,
}

impl From<&UserSettings> for SettingsView {
    fn from(settings: &UserSettings) -> Self {
        let masked = if settings.gumroad_token.is_empty() {
            String::new()
        } else {
            "***".to_string()
        };

        Self {
            gumroad_token: masked,
            monthly_goal: settings.monthly_goal,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}
