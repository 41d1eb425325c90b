// src/routes.rs

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::AppState, handlers};

// Origem do front-end em desenvolvimento, sempre liberada
const LOCAL_FRONTEND_ORIGIN: &str = "http://localhost:3847";

pub fn app(app_state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&app_state.config.frontend_url)?;

    let sales_routes = Router::new()
        .route("/sales", get(handlers::sales::get_sales))
        .route("/settings"
               ,get(handlers::settings::get_settings)
               .post(handlers::settings::update_settings)
        );

    let generate_routes = Router::new()
        .route("/generate", post(handlers::generate::generate))
        .route("/generate-content", post(handlers::generate::generate_content));

    let app = Router::new()
        .nest("/api", sales_routes.merge(generate_routes).route("/health", get(health)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    Ok(app)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

// Credenciais liberadas não combinam com "*": métodos e headers são espelhados
fn cors_layer(frontend_url: &str) -> anyhow::Result<CorsLayer> {
    let frontend_url = frontend_url.trim_end_matches('/');
    let mut origins = vec![HeaderValue::from_str(frontend_url)?];
    if frontend_url != LOCAL_FRONTEND_ORIGIN {
        origins.push(HeaderValue::from_static(LOCAL_FRONTEND_ORIGIN));
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
