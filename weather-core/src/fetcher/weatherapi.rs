use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{config::Config, model::WeatherResult};

use super::{FetchError, WeatherFetcher};

/// Current conditions from WeatherAPI.com (`/current.json`).
#[derive(Debug, Clone)]
pub struct WeatherApiFetcher {
    config: Config,
    http: Client,
}

impl WeatherApiFetcher {
    pub fn new(config: Config) -> Self {
        Self { config, http: Client::new() }
    }

    async fn fetch_current(
        &self,
        api_key: Option<String>,
        location: &str,
    ) -> Result<WeatherResult, FetchError> {
        let api_key = api_key.ok_or(FetchError::MissingApiKey)?;
        let url = format!("{}/current.json", self.config.base_url());

        let res = self
            .http
            .get(&url)
            .query(&[("key", api_key.as_str()), ("q", location)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherResult {
    fn from(parsed: WaResponse) -> Self {
        WeatherResult::celsius(
            parsed.current.temp_c,
            parsed.current.condition.text,
            parsed.location.name,
        )
    }
}

#[async_trait]
impl WeatherFetcher for WeatherApiFetcher {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherResult, FetchError> {
        self.fetch_current(self.config.resolve_api_key(), location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_current_response() {
        let body = r#"{
            "location": { "name": "London", "country": "United Kingdom" },
            "current": { "temp_c": 5.0, "feelslike_c": 2.1, "condition": { "text": "Rain", "code": 1183 } }
        }"#;
        let parsed: WaResponse = serde_json::from_str(body).expect("valid body");

        assert_eq!(
            WeatherResult::from(parsed),
            WeatherResult::celsius(5.0, "Rain".into(), "London".into())
        );
    }

    #[test]
    fn missing_condition_is_a_decode_error() {
        let body = r#"{ "location": { "name": "X" }, "current": { "temp_c": 1.0 } }"#;
        assert!(serde_json::from_str::<WaResponse>(body).is_err());
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        // Unroutable base URL: reaching the network would give `Network`, not `MissingApiKey`.
        let config = Config { base_url: Some("http://127.0.0.1:1/v1".into()), ..Default::default() };
        let err = WeatherApiFetcher::new(config).fetch_current(None, "London").await.unwrap_err();

        assert!(matches!(err, FetchError::MissingApiKey), "got {err:?}");
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let out = truncate_body(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
    }
}
