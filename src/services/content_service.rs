// src/services/content_service.rs

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::{
    models::generate::{GenerateContentRequest, GenerateContentResponse, ProductCategory},
    services::prompts::content_prompt,
};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1/models";
const GEMINI_MODEL: &str = "gemini-2.5-flash";
const FILENAME_MAX_CHARS: usize = 50;

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

#[derive(Clone)]
pub struct ContentService {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl ContentService {
    pub fn new(api_key: String, api_base: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self { http, api_key, api_base })
    }

    /// Gera o conteúdo completo do produto em Markdown.
    /// Qualquer falha do Gemini cai no documento de exemplo.
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> GenerateContentResponse {
        if self.api_key.is_empty() {
            return mock_content(request.category, &request.product_name, &request.target);
        }

        match self.call_gemini(request).await {
            Ok(content) => GenerateContentResponse {
                content,
                filename: markdown_filename(&request.product_name),
            },
            Err(e) => {
                tracing::warn!("⚠️ Erro na API do Gemini, usando conteúdo de exemplo: {:#}", e);
                mock_content(request.category, &request.product_name, &request.target)
            }
        }
    }

    async fn call_gemini(&self, request: &GenerateContentRequest) -> anyhow::Result<String> {
        let prompt = content_prompt(
            request.category,
            &request.product_name,
            &request.target,
            request.additional_notes.as_deref(),
        );
        let url = format!(
            "{}/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            GEMINI_MODEL
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
                "generationConfig": { "temperature": 0.8, "maxOutputTokens": 8192 },
            }))
            .send()
            .await?
            .error_for_status()?;

        let body: GeminiResponse = response.json().await?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| anyhow::anyhow!("resposta do Gemini sem candidatos"))
    }
}

/// Nome do arquivo para download: espaços e '/' viram '_', no máximo 50 caracteres.
pub fn markdown_filename(product_name: &str) -> String {
    let safe: String = product_name
        .chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .take(FILENAME_MAX_CHARS)
        .collect();

    format!("{safe}.md")
}

pub fn mock_content(category: ProductCategory, product_name: &str, target: &str) -> GenerateContentResponse {
    let label = category.label();

    let content = format!(
        r#"# {product_name}

## はじめに

この{label}は「{target}」の方に向けて作成しました。

## 目次

1. 第1章：基本の使い方
2. 第2章：応用テクニック
3. 第3章：よくある質問

## 第1章：基本の使い方

ここに基本的な使い方の説明が入ります。

### ポイント1
- 項目A
- 項目B
- 項目C

### ポイント2
- 項目D
- 項目E
- 項目F

## 第2章：応用テクニック

応用的な使い方を紹介します。

### テクニック1

具体的な手順を説明...

### テクニック2

別のアプローチを説明...

## 第3章：よくある質問

**Q: 〇〇はどうすればいいですか？**

A: 〇〇の手順で対応できます。

**Q: △△の場合はどうなりますか？**

A: △△の場合は、□□を試してください。

---

ご購入ありがとうございました。
"#
    );

    GenerateContentResponse {
        content,
        filename: markdown_filename(product_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_replaces_separators() {
        assert_eq!(markdown_filename("Notion 家計簿/2024"), "Notion_家計簿_2024.md");
    }

    #[test]
    fn test_filename_truncates_by_characters() {
        let long = "あ".repeat(80);
        let filename = markdown_filename(&long);
        assert_eq!(filename.chars().count(), 50 + ".md".len());
        assert!(filename.ends_with(".md"));
    }

    #[test]
    fn test_mock_content_mentions_product_and_target() {
        let result = mock_content(ProductCategory::Checklist, "引越しリスト", "新社会人");

        assert!(result.content.starts_with("# 引越しリスト\n"));
        assert!(result.content.contains("このチェックリスト/ワークシートは「新社会人」の方に向けて作成しました。"));
        assert!(result.content.ends_with("ご購入ありがとうございました。\n"));
        assert_eq!(result.filename, "引越しリスト.md");
    }

    #[tokio::test]
    async fn test_without_key_returns_mock() {
        let service = ContentService::new(String::new(), GEMINI_API_BASE.into()).unwrap();
        let request = GenerateContentRequest {
            category: ProductCategory::Icon,
            product_name: "SNS アイコン".into(),
            target: "配信者".into(),
            additional_notes: None,
        };

        let result = service.generate_content(&request).await;
        assert_eq!(result, mock_content(ProductCategory::Icon, "SNS アイコン", "配信者"));
        assert_eq!(result.filename, "SNS_アイコン.md");
    }

    #[tokio::test]
    async fn test_unreachable_gemini_falls_back_to_mock() {
        let service = ContentService::new("key".into(), "http://127.0.0.1:9".into()).unwrap();
        let request = GenerateContentRequest {
            category: ProductCategory::Prompt,
            product_name: "ChatGPT 時短術".into(),
            target: "会社員".into(),
            additional_notes: Some("例文多め".into()),
        };

        let result = service.generate_content(&request).await;
        assert_eq!(result, mock_content(ProductCategory::Prompt, "ChatGPT 時短術", "会社員"));
    }
}
