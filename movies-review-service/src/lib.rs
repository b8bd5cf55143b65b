pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::repository::ReviewRepository;

pub struct AppState {
    pub repository: ReviewRepository,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/reviews", get(routes::get_all_reviews).post(routes::add_review))
        .route("/v1/reviews/{id}", put(routes::update_review).delete(routes::delete_review))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
