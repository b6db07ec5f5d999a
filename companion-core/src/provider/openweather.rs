use reqwest::Client;
use serde::Deserialize;

use async_trait::async_trait;

use crate::model::{Coordinates, WeatherReading};

use super::{ProviderError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host; tests use this with a mock
    /// server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(
        &self,
        coordinates: &Coordinates,
    ) -> Result<WeatherReading, ProviderError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        // Single attempt: no retry, no timeout beyond the client default.
        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;

        let condition = parsed
            .weather
            .first()
            .map(|w| w.main.clone())
            .ok_or_else(|| {
                ProviderError::Parse("response contained no weather conditions".to_string())
            })?;

        Ok(WeatherReading {
            temperature_k: parsed.main.temp,
            condition,
        })
    }
}

// Only the two consumed fields are modeled; everything else in the payload
// is ignored.
#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, coordinates: &Coordinates) -> Result<WeatherReading, ProviderError> {
        self.fetch_current(coordinates).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Cut on a char boundary; a byte slice could land inside a multi-byte
    // character and panic.
    let cut = body
        .char_indices()
        .take_while(|(i, _)| *i <= MAX)
        .last()
        .map_or(0, |(i, _)| i);

    format!("{}...", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenWeatherProvider {
        OpenWeatherProvider::with_base_url("TEST_KEY".to_string(), server.uri())
    }

    fn coordinates() -> Coordinates {
        Coordinates {
            latitude: 47.6062,
            longitude: -122.3321,
        }
    }

    #[tokio::test]
    async fn fetches_and_extracts_temperature_and_condition() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("lat", "47.6062"))
            .and(query_param("lon", "-122.3321"))
            .and(query_param("appid", "TEST_KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": {"temp": 273.15, "humidity": 81},
                "weather": [{"id": 600, "main": "Snow", "description": "light snow"}],
                "name": "Seattle"
            })))
            .mount(&mock_server)
            .await;

        let reading = provider_for(&mock_server)
            .current(&coordinates())
            .await
            .unwrap();

        assert_eq!(reading.condition, "Snow");
        assert_eq!(reading.temperature_f(), 32);
    }

    #[tokio::test]
    async fn first_weather_entry_wins() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": {"temp": 285.0},
                "weather": [{"main": "Rain"}, {"main": "Mist"}]
            })))
            .mount(&mock_server)
            .await;

        let reading = provider_for(&mock_server)
            .current(&coordinates())
            .await
            .unwrap();

        assert_eq!(reading.condition, "Rain");
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .current(&coordinates())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn missing_temperature_field_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [{"main": "Clear"}]
            })))
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .current(&coordinates())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn empty_weather_array_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": {"temp": 285.0},
                "weather": []
            })))
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .current(&coordinates())
            .await
            .unwrap_err();

        match err {
            ProviderError::Parse(msg) => assert!(msg.contains("no weather conditions")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
            )
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .current(&coordinates())
            .await
            .unwrap_err();

        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status.as_u16(), 401);
                assert!(body.contains("Invalid API key"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn multibyte_error_bodies_truncate_on_a_char_boundary() {
        // 100 euro signs, 300 bytes: byte 200 falls inside a character
        let body = "€".repeat(100);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.trim_end_matches('.'), "€".repeat(66));
    }

    #[tokio::test]
    async fn multibyte_status_error_body_does_not_panic() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(500).set_body_string("€".repeat(100)))
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server)
            .current(&coordinates())
            .await
            .unwrap_err();

        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert!(body.ends_with("..."));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
