// src/services/gumroad_service.rs

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Deserialize;
use serde_json::Value;

use crate::models::sales::SaleRecord;

pub const GUMROAD_API_BASE: &str = "https://api.gumroad.com/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const UNKNOWN_PRODUCT: &str = "Unknown";

#[derive(Debug, thiserror::Error)]
pub enum SalesSourceError {
    #[error("falha de transporte: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gumroad respondeu com status {0}")]
    Status(reqwest::StatusCode),
}

/// Origem das vendas brutas. Não sabe nada de agregação.
#[async_trait]
pub trait SalesSource: Send + Sync {
    async fn fetch_sales(
        &self,
        access_token: &str,
        since: NaiveDateTime,
    ) -> Result<Vec<SaleRecord>, SalesSourceError>;
}

// Formato bruto da resposta da API (campos todos opcionais)
#[derive(Debug, Deserialize)]
struct SalesPage {
    #[serde(default)]
    sales: Vec<RawSale>,
}

#[derive(Debug, Deserialize)]
struct RawSale {
    price: Option<Value>,
    product_name: Option<Value>,
    created_at: Option<String>,
}

impl From<RawSale> for SaleRecord {
    fn from(raw: RawSale) -> Self {
        let product_name = match raw.product_name {
            Some(Value::String(name)) => name,
            _ => UNKNOWN_PRODUCT.to_string(),
        };

        SaleRecord {
            product_name,
            price_minor_units: raw.price.as_ref().map(price_to_minor_units).unwrap_or(0),
            created_at: raw.created_at.unwrap_or_default(),
        }
    }
}

/// Converte o preço (unidade principal) para centavos, truncando.
/// Feito em Decimal para não acumular erro de ponto flutuante.
fn price_to_minor_units(price: &Value) -> i64 {
    let decimal = match price {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    };

    // Estouro na multiplicação ou fora de i64 também vira 0
    decimal
        .and_then(|d| d.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|d| d.trunc().to_i64())
        .unwrap_or(0)
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[derive(Clone)]
pub struct GumroadClient {
    http: reqwest::Client,
    base_url: String,
}

impl GumroadClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl SalesSource for GumroadClient {
    async fn fetch_sales(
        &self,
        access_token: &str,
        since: NaiveDateTime,
    ) -> Result<Vec<SaleRecord>, SalesSourceError> {
        let url = format!("{}/sales", self.base_url.trim_end_matches('/'));
        let after = since.format("%Y-%m-%dT%H:%M:%S").to_string();

        let response = self
            .http
            .get(&url)
            .query(&[("access_token", access_token), ("after", after.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SalesSourceError::Status(response.status()));
        }

        let page: SalesPage = response.json().await?;
        tracing::debug!("Gumroad devolveu {} vendas desde {}", page.sales.len(), after);

        Ok(page.sales.into_iter().map(SaleRecord::from).collect())
    }
}
