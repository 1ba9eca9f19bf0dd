use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_url_handler, get_url_handler, health_handler, missing_code_handler, redirect_handler,
    shorten_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten", post(shorten_handler))
            .nest(
                "/v1/urls",
                Router::new()
                    .route("/", post(create_url_handler))
                    .route("/{short_code}", get(get_url_handler)),
            )
            .route("/", get(missing_code_handler))
            .route("/{short_code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
