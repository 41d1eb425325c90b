// src/handlers/generate.rs

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::generate::{
        GenerateContentRequest, GenerateContentResponse, GenerateRequest, GenerateResponse,
    },
};

// POST /api/generate
pub async fn generate(
    State(app_state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let product = app_state.claude_service.generate_product(&payload).await?;

    Ok(Json(product))
}

// POST /api/generate-content
pub async fn generate_content(
    State(app_state): State<AppState>,
    Json(payload): Json<GenerateContentRequest>,
) -> Result<Json<GenerateContentResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let result = app_state.content_service.generate_content(&payload).await;

    Ok(Json(result))
}
