use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::retry::{with_retry, RetryPolicy};

const OPEN_METEO_BASE: &str = "https://api.open-meteo.com/v1";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WeatherError>;

/// Client for the Open-Meteo forecast API. No auth, no tokens - the
/// friendliest public API in the business.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    retry_policy: RetryPolicy,
}

impl WeatherClient {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("dailyboard/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Current conditions plus today's high/low for one location.
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<ForecastResponse> {
        let url = format!("{}/forecast", self.base_url);
        let lat = latitude.to_string();
        let lon = longitude.to_string();

        with_retry(&self.retry_policy, || async {
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("latitude", lat.as_str()),
                    ("longitude", lon.as_str()),
                    ("current", "temperature_2m,weather_code"),
                    ("daily", "temperature_2m_max,temperature_2m_min"),
                    ("temperature_unit", "celsius"),
                    ("timezone", timezone),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(WeatherError::RequestFailed(format!(
                    "Status {}: {}",
                    status, body
                )));
            }

            let forecast: ForecastResponse = response.json().await?;
            Ok(forecast)
        })
        .await
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentConditions,
    pub daily: DailyRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub weather_code: u8,
}

/// Daily aggregates arrive as parallel arrays, first element is today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRange {
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}
