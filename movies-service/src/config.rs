use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub movies_info_url: String,
    pub reviews_url: String,
    pub retry_max_retries: u32,
    pub retry_delay: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8083".to_string()).parse().context("PORT")?;

        let movies_info_url = std::env::var("MOVIES_INFO_URL")
            .unwrap_or_else(|_| "http://localhost:8080/v1/movieinfos".to_string());
        let reviews_url = std::env::var("REVIEWS_URL")
            .unwrap_or_else(|_| "http://localhost:8081/v1/reviews".to_string());

        let retry_max_retries: u32 =
            std::env::var("RETRY_MAX_RETRIES").ok().and_then(|s| s.parse().ok()).unwrap_or(3);
        let retry_delay_ms: u64 =
            std::env::var("RETRY_DELAY_MS").ok().and_then(|s| s.parse().ok()).unwrap_or(1000);
        let request_timeout_secs: u64 =
            std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|s| s.parse().ok()).unwrap_or(30);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            movies_info_url,
            reviews_url,
            retry_max_retries,
            retry_delay: Duration::from_millis(retry_delay_ms),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}
