pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::repository::MovieInfoRepository;

pub struct AppState {
    pub repository: MovieInfoRepository,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/v1/movieinfos",
            get(routes::get_all_movie_infos).post(routes::add_movie_info),
        )
        .route(
            "/v1/movieinfos/{id}",
            get(routes::get_movie_info_by_id)
                .put(routes::update_movie_info)
                .delete(routes::delete_movie_info),
        )
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
