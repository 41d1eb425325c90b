// src/config.rs

use std::{env, sync::Arc};

use anyhow::Context;

use crate::{
    db::SettingsRepository,
    models::settings::{UserSettings, DEFAULT_MONTHLY_GOAL},
    services::{
        claude_service::{ClaudeService, ANTHROPIC_API_URL},
        content_service::{ContentService, GEMINI_API_BASE},
        gumroad_service::{GumroadClient, GUMROAD_API_BASE},
        sales_service::SalesService,
    },
};

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3847";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-haiku-4-5-20241022";
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8291";

// Configuração lida do ambiente uma única vez, na inicialização
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    pub anthropic_api_url: String,
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub gumroad_access_token: String,
    pub gumroad_api_base: String,
    pub frontend_url: String,
    pub monthly_goal: i64,
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: String::new(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            anthropic_api_url: ANTHROPIC_API_URL.to_string(),
            gemini_api_key: String::new(),
            gemini_api_base: GEMINI_API_BASE.to_string(),
            gumroad_access_token: String::new(),
            gumroad_api_base: GUMROAD_API_BASE.to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            monthly_goal: DEFAULT_MONTHLY_GOAL,
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // O .env é opcional: em produção as variáveis vêm do ambiente
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let monthly_goal = match env::var("MONTHLY_GOAL") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MONTHLY_GOAL inválido: {raw}"))?,
            Err(_) => defaults.monthly_goal,
        };

        Ok(Self {
            anthropic_api_key: var_or("ANTHROPIC_API_KEY", defaults.anthropic_api_key),
            anthropic_model: var_or("ANTHROPIC_MODEL", defaults.anthropic_model),
            anthropic_api_url: var_or("ANTHROPIC_API_URL", defaults.anthropic_api_url),
            gemini_api_key: var_or("GEMINI_API_KEY", defaults.gemini_api_key),
            gemini_api_base: var_or("GEMINI_API_BASE", defaults.gemini_api_base),
            gumroad_access_token: var_or("GUMROAD_ACCESS_TOKEN", defaults.gumroad_access_token),
            gumroad_api_base: var_or("GUMROAD_API_BASE", defaults.gumroad_api_base),
            frontend_url: var_or("FRONTEND_URL", defaults.frontend_url),
            monthly_goal,
            server_addr: var_or("SERVER_ADDR", defaults.server_addr),
        })
    }
}

fn var_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::debug!("{key} não definida, usando o padrão");
        default
    })
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub settings_repo: SettingsRepository,
    pub sales_service: SalesService,
    pub claude_service: ClaudeService,
    pub content_service: ContentService,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let gumroad = GumroadClient::new(config.gumroad_api_base.clone())?;
        let sales_service = SalesService::new(Arc::new(gumroad), config.gumroad_access_token.clone());

        let claude_service = ClaudeService::new(
            config.anthropic_api_key.clone(),
            config.anthropic_model.clone(),
            config.anthropic_api_url.clone(),
        )?;
        let content_service =
            ContentService::new(config.gemini_api_key.clone(), config.gemini_api_base.clone())?;

        let settings_repo = SettingsRepository::new(UserSettings {
            monthly_goal: config.monthly_goal,
            ..UserSettings::default()
        });

        if config.gumroad_access_token.is_empty() {
            tracing::info!("GUMROAD_ACCESS_TOKEN vazio: o painel usa dados de exemplo até um token ser salvo");
        }

        Ok(Self {
            config: Arc::new(config),
            settings_repo,
            sales_service,
            claude_service,
            content_service,
        })
    }
}
