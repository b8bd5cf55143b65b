use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::MovieInfo,
};

#[derive(Debug, Deserialize)]
pub struct MovieInfoFilter {
    year: Option<i32>,
    name: Option<String>,
}

pub async fn add_movie_info(
    State(state): State<Arc<AppState>>,
    Json(movie_info): Json<MovieInfo>,
) -> AppResult<(StatusCode, Json<MovieInfo>)> {
    validated(&movie_info)?;

    let saved = state.repository.save(movie_info).await?;
    tracing::debug!(id = ?saved.movie_info_id, name = %saved.name, "movie info created");
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn get_all_movie_infos(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MovieInfoFilter>,
) -> AppResult<Json<Vec<MovieInfo>>> {
    let infos = state.repository.find_all(filter.year, filter.name.as_deref()).await?;
    Ok(Json(infos))
}

pub async fn get_movie_info_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<MovieInfo>> {
    let info = state.repository.find_by_id(&id).await?;
    info.map(Json).ok_or(AppError::NotFound(id))
}

pub async fn update_movie_info(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(movie_info): Json<MovieInfo>,
) -> AppResult<Json<MovieInfo>> {
    let updated = state.repository.update(&id, movie_info).await?;
    updated.map(Json).ok_or(AppError::NotFound(id))
}

pub async fn delete_movie_info(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.repository.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validated(movie_info: &MovieInfo) -> Result<(), AppError> {
    let mut violations = movie_info.validate();
    if violations.is_empty() {
        return Ok(());
    }
    violations.sort();
    tracing::info!(violations = ?violations, "rejected movie info");
    Err(AppError::Validation(violations.join(", ")))
}
