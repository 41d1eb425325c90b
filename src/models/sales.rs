// src/models/sales.rs

use serde::{Deserialize, Serialize};

// Uma venda já normalizada (preço em centavos), pronta para agregação
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    pub product_name: String,
    pub price_minor_units: i64,
    pub created_at: String,
}

// 1. Vendas por produto (ranking)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_name: String,
    pub count: i64,
    pub revenue: i64,
}

// 2. Vendas por dia (gráfico)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: String, // YYYY-MM-DD (ou prefixo parcial, se a origem vier truncada)
    pub revenue: i64,
}

// 3. Resumo do mês (o que o front-end consome)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_sales: i64,
    pub total_revenue: i64,
    pub monthly_goal: i64,
    pub sales_by_product: Vec<ProductSales>,
    pub daily_sales: Vec<DailySales>,
}
