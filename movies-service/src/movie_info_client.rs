use crate::{
    error::{AppError, AppResult},
    models::MovieInfo,
    retry::RetryPolicy,
};

pub struct MovieInfoClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl MovieInfoClient {
    pub fn new(client: reqwest::Client, base_url: String, retry: RetryPolicy) -> Self {
        Self { client, base_url, retry }
    }

    /// Fetches one movie info by id. 5xx responses and timeouts are retried
    /// per the policy before the error surfaces; 4xx never are.
    pub async fn fetch_by_id(&self, movie_id: &str) -> AppResult<MovieInfo> {
        self.retry.run(|| self.fetch_once(movie_id)).await
    }

    async fn fetch_once(&self, movie_id: &str) -> AppResult<MovieInfo> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), movie_id);
        tracing::debug!(id = %movie_id, "fetching movie info");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(movie_id.to_string()));
        }
        if status.is_client_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Client { status: status.as_u16(), message: body });
        }
        if status.is_server_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Server {
                status: status.as_u16(),
                message: format!("Server exception in MovieInfoService : {body}"),
            });
        }

        Ok(resp.json().await?)
    }
}
