// src/services/sales_service.rs

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::{
    models::{sales::DashboardSummary, settings::UserSettings},
    services::{
        gumroad_service::SalesSource,
        sales_aggregator::{aggregate, mock_summary},
    },
};

#[derive(Clone)]
pub struct SalesService {
    source: Arc<dyn SalesSource>,
    // Token vindo do ambiente (.env), usado quando o usuário não salvou um
    fallback_token: String,
}

impl SalesService {
    pub fn new(source: Arc<dyn SalesSource>, fallback_token: String) -> Self {
        Self { source, fallback_token }
    }

    /// Resumo do mês corrente. Sem token, ou com qualquer falha da Gumroad,
    /// devolve o resumo de exemplo (só para esta requisição, sem retry).
    pub async fn dashboard(&self, settings: &UserSettings, today: NaiveDate) -> DashboardSummary {
        let token = if settings.gumroad_token.is_empty() {
            self.fallback_token.as_str()
        } else {
            settings.gumroad_token.as_str()
        };

        if token.is_empty() {
            tracing::debug!("Nenhum token da Gumroad configurado, usando dados de exemplo");
            return mock_summary(settings.monthly_goal, today);
        }

        match self.source.fetch_sales(token, first_of_month(today)).await {
            Ok(records) => aggregate(&records, settings.monthly_goal),
            Err(e) => {
                tracing::warn!("⚠️ Falha ao buscar vendas na Gumroad, usando dados de exemplo: {}", e);
                mock_summary(settings.monthly_goal, today)
            }
        }
    }
}

fn first_of_month(today: NaiveDate) -> NaiveDateTime {
    today
        .with_day(1)
        .unwrap_or(today)
        .and_time(chrono::NaiveTime::MIN)
}
