use crate::{
    error::{AppError, AppResult},
    models::Review,
    retry::RetryPolicy,
};

pub struct ReviewClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ReviewClient {
    pub fn new(client: reqwest::Client, base_url: String, retry: RetryPolicy) -> Self {
        Self { client, base_url, retry }
    }

    pub async fn fetch_by_movie_id(&self, movie_id: &str) -> AppResult<Vec<Review>> {
        self.retry.run(|| self.fetch_once(movie_id)).await
    }

    async fn fetch_once(&self, movie_id: &str) -> AppResult<Vec<Review>> {
        tracing::debug!(id = %movie_id, "fetching reviews");

        let resp = self
            .client
            .get(self.base_url.trim_end_matches('/'))
            .query(&[("movieInfoId", movie_id)])
            .send()
            .await?;
        let status = resp.status();

        // a movie with no reviews yet is not an error
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if status.is_client_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Client { status: status.as_u16(), message: body });
        }
        if status.is_server_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Server {
                status: status.as_u16(),
                message: format!("Server exception in ReviewService : {body}"),
            });
        }

        Ok(resp.json().await?)
    }
}
