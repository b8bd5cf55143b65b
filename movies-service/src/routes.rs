use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::AppResult, models::Movie};

// The movie-info leg is mandatory: any failure there short-circuits the
// composite. Review absence is substituted with an empty list by the client.
pub async fn get_movie_by_id(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie_info = state.movie_info_client.fetch_by_id(&movie_id).await?;
    let review_list = state.review_client.fetch_by_movie_id(&movie_id).await?;

    tracing::debug!(id = %movie_id, reviews = review_list.len(), "assembled movie");
    Ok(Json(Movie { movie_info, review_list }))
}
