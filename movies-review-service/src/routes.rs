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
    models::Review,
};

#[derive(Debug, Deserialize)]
pub struct ReviewFilter {
    #[serde(rename = "movieInfoId")]
    movie_info_id: Option<String>,
}

pub async fn add_review(
    State(state): State<Arc<AppState>>,
    Json(review): Json<Review>,
) -> AppResult<(StatusCode, Json<Review>)> {
    validated(&review)?;

    let saved = state.repository.save(review).await?;
    tracing::debug!(id = ?saved.review_id, movie = ?saved.movie_info_id, "review created");
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn get_all_reviews(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ReviewFilter>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.repository.find_all(filter.movie_info_id.as_deref()).await?;
    Ok(Json(reviews))
}

pub async fn update_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(review): Json<Review>,
) -> AppResult<Json<Review>> {
    let updated = state.repository.update(&id, review).await?;
    updated.map(Json).ok_or(AppError::NotFound(id))
}

pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.repository.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validated(review: &Review) -> Result<(), AppError> {
    let mut violations = review.validate();
    if violations.is_empty() {
        return Ok(());
    }
    violations.sort();
    tracing::info!(violations = ?violations, "rejected review");
    Err(AppError::Validation(violations.join(", ")))
}
