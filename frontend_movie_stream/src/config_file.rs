use gloo::{console::warn, net::http::Request};
use serde::Deserialize;

const CONFIG_PATH: &str = "/config/config.json";
const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Build-time `MOVIE_API_BASE_URL`, or the local backend.
    pub fn fallback() -> Self {
        Self::new(option_env!("MOVIE_API_BASE_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn from_json(raw: &str) -> Result<Self, String> {
        let parsed: AppConfig = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        if parsed.api_base_url.trim().is_empty() {
            return Err("api_base_url is empty".to_owned());
        }
        Ok(Self::new(&parsed.api_base_url))
    }
}

/// Fetch the deployment config; never fails, falls back instead.
pub async fn load_config() -> AppConfig {
    match fetch_config().await {
        Ok(config) => config,
        Err(e) => {
            warn!(format!("Using fallback API url, {CONFIG_PATH} unavailable: {e}"));
            AppConfig::fallback()
        }
    }
}

async fn fetch_config() -> Result<AppConfig, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("status {}", response.status()));
    }

    let raw = response.text().await.map_err(|e| e.to_string())?;
    AppConfig::from_json(&raw)
}
