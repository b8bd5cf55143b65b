pub mod config;
pub mod error;
pub mod models;
pub mod movie_info_client;
pub mod retry;
pub mod review_client;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config, movie_info_client::MovieInfoClient, retry::RetryPolicy,
    review_client::ReviewClient,
};

pub struct AppState {
    pub movie_info_client: MovieInfoClient,
    pub review_client: ReviewClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("movies-service/0.1")
            .timeout(config.request_timeout)
            .build()?;
        let retry = RetryPolicy::new(config.retry_max_retries, config.retry_delay);

        Ok(Self {
            movie_info_client: MovieInfoClient::new(
                http.clone(),
                config.movies_info_url.clone(),
                retry,
            ),
            review_client: ReviewClient::new(http, config.reviews_url.clone(), retry),
        })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/movies/{id}", get(routes::get_movie_by_id))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
