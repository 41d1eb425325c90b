// src/handlers/settings.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    config::AppState,
    models::settings::{SaveSettingsRequest, SettingsView, StatusResponse, UserSettings},
};

// GET /api/settings
pub async fn get_settings(State(app_state): State<AppState>) -> impl IntoResponse {
    let settings = app_state.settings_repo.get_settings().await;

    (StatusCode::OK, Json(SettingsView::from(&settings)))
}

// POST /api/settings
pub async fn update_settings(
    State(app_state): State<AppState>,
    Json(payload): Json<SaveSettingsRequest>,
) -> impl IntoResponse {
    let saved = app_state
        .settings_repo
        .update_settings(UserSettings::from(payload))
        .await;

    tracing::info!(
        "Configurações salvas (token {}, meta {})",
        if saved.gumroad_token.is_empty() { "vazio" } else { "definido" },
        saved.monthly_goal
    );

    (StatusCode::OK, Json(StatusResponse { status: "ok" }))
}
