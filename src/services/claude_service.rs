// src/services/claude_service.rs

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::{
    common::error::AppError,
    models::generate::{GenerateRequest, GenerateResponse, ProductCategory},
    services::prompts::product_prompt,
};

pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[derive(Clone)]
pub struct ClaudeService {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl ClaudeService {
    pub fn new(api_key: String, model: String, api_url: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self { http, api_key, model, api_url })
    }

    /// Propõe nomes, descrição, preço e tags para um produto digital.
    ///
    /// Sem chave configurada, ou se o modelo devolver algo que não é JSON,
    /// responde com a proposta de exemplo. Erros de rede/HTTP sobem como 502.
    pub async fn generate_product(&self, request: &GenerateRequest) -> Result<GenerateResponse, AppError> {
        if self.api_key.is_empty() {
            return Ok(mock_product(request.category, &request.target));
        }

        let prompt = product_prompt(
            request.category,
            &request.target,
            request.additional_notes.as_deref(),
        );

        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&json!({
                "model": self.model,
                "max_tokens": MAX_TOKENS,
                "messages": [{ "role": "user", "content": prompt }],
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus(response.status()));
        }

        let message: MessageResponse = response.json().await?;
        let text = message
            .content
            .into_iter()
            .find_map(|block| block.text)
            .unwrap_or_default();

        match parse_product(&text) {
            Some(product) => Ok(product),
            None => {
                tracing::warn!("Resposta do Claude não é um JSON válido, usando proposta de exemplo");
                Ok(mock_product(request.category, &request.target))
            }
        }
    }
}

// Pega o trecho entre o primeiro '{' e o último '}' e tenta desserializar
fn parse_product(text: &str) -> Option<GenerateResponse> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&text[start..=end]).ok()
}

pub fn mock_product(category: ProductCategory, target: &str) -> GenerateResponse {
    let label = category.label();

    GenerateResponse {
        product_names: vec![
            format!("【保存版】{target}のための{label}"),
            format!("{target}必見！即実践{label}"),
            format!("初心者OK！{target}向け{label}完全ガイド"),
        ],
        description: format!(
            "「{target}」の方に向けた{label}です。\n\n\
             このテンプレートを使えば、面倒な作業を大幅に短縮できます。\n\
             初心者でもすぐに使い始められるよう、わかりやすい説明付き。\n\n\
             【含まれる内容】\n\
             ・すぐに使えるテンプレート一式\n\
             ・カスタマイズガイド\n\
             ・活用事例集"
        ),
        suggested_price: category.average_price(),
        tags: vec![
            target.to_string(),
            label.to_string(),
            "テンプレート".to_string(),
            "時短".to_string(),
            "初心者向け".to_string(),
        ],
    }
}
