// src/handlers/sales.rs

use axum::{extract::State, Json};
use chrono::Local;

use crate::{config::AppState, models::sales::DashboardSummary};

// GET /api/sales
// Sempre 200: sem token ou com a Gumroad fora do ar, vem o resumo de exemplo
pub async fn get_sales(State(app_state): State<AppState>) -> Json<DashboardSummary> {
    // Cópia das configurações: um POST concorrente não muda esta requisição
    let settings = app_state.settings_repo.get_settings().await;
    let today = Local::now().date_naive();

    Json(app_state.sales_service.dashboard(&settings, today).await)
}
