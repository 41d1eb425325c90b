// src/models/generate.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

// Categorias de produto digital aceitas pelo gerador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    #[default]
    Prompt,
    Notion,
    Canva,
    Ebook,
    Excel,
    Spreadsheet,
    Powerpoint,
    Figma,
    Checklist,
    Linestamp,
    Icon,
    Course,
}

impl ProductCategory {
    // Nome exibido (em japonês, como o front-end mostra)
    pub fn label(self) -> &'static str {
        match self {
            Self::Prompt => "AIプロンプト集",
            Self::Notion => "Notionテンプレート",
            Self::Canva => "Canvaテンプレート",
            Self::Ebook => "電子書籍",
            Self::Excel => "Excelテンプレート",
            Self::Spreadsheet => "スプレッドシート",
            Self::Powerpoint => "PowerPointテンプレート",
            Self::Figma => "Figmaテンプレート",
            Self::Checklist => "チェックリスト/ワークシート",
            Self::Linestamp => "LINEスタンプ",
            Self::Icon => "アイコンセット",
            Self::Course => "オンラインコース",
        }
    }

    // Faixa de preço sugerida (em ienes): (mínimo, máximo)
    pub fn price_range(self) -> (i64, i64) {
        match self {
            Self::Prompt => (980, 2980),
            Self::Notion => (500, 1500),
            Self::Canva => (800, 2000),
            Self::Ebook => (500, 1980),
            Self::Excel => (500, 1500),
            Self::Spreadsheet => (500, 1500),
            Self::Powerpoint => (800, 2000),
            Self::Figma => (1500, 5000),
            Self::Checklist => (300, 980),
            Self::Linestamp => (120, 480),
            Self::Icon => (500, 2000),
            Self::Course => (3000, 30000),
        }
    }

    pub fn average_price(self) -> i64 {
        let (min, max) = self.price_range();
        (min + max) / 2
    }
}

// Pedido de proposta de produto
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub category: ProductCategory,
    #[serde(default)]
    pub target: String,
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub product_names: Vec<String>,
    pub description: String,
    pub suggested_price: i64,
    pub tags: Vec<String>,
}

// Pedido de geração do conteúdo completo (Markdown)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(default)]
    pub category: ProductCategory,

    #[validate(length(min = 1, message = "O campo 'productName' é obrigatório."))]
    #[serde(default)]
    pub product_name: String,

    #[serde(default)]
    pub target: String,

    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    pub content: String,
    pub filename: String,
}
