use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderName, Method,
    },
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::Config, handler::*, middleware::USERNAME_HEADER, AppState};

pub fn create_router(app_state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/", get(health_checker_handler))
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
        .route("/users/:id/pro", patch(upgrade_to_pro))
        .route("/todos", get(get_todos).post(create_todo))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
        .route("/todos/:id/done", patch(complete_todo))
        .with_state(app_state)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

// Configure CORS settings for the application
fn cors_layer(config: &Config) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ];
    let headers = [
        ACCEPT,
        CONTENT_TYPE,
        HeaderName::from_static(USERNAME_HEADER),
    ];

    match &config.cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods(methods)
            .allow_credentials(true)
            .allow_headers(headers),
        None => CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(headers),
    }
}
