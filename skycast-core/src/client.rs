//! OpenWeatherMap API client
//!
//! Two independent operations, one request each. No caching, no retries:
//! calling twice sends two requests.

use std::time::Duration;

use reqwest::Client;

use crate::error::WeatherError;
use crate::model::{CurrentConditions, ForecastSeries, Locator, Units};
use crate::provider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

/// Client for the current-conditions and forecast endpoints
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: Units,
}

impl WeatherClient {
    /// Client against the public provider with the default timeout
    pub fn new(api_key: impl Into<String>, units: Units) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, units, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Client against another base URL (proxies, tests)
    pub fn with_base_url(
        api_key: impl Into<String>,
        units: Units,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            units,
        })
    }

    /// Current conditions at `locator`
    pub async fn fetch_current(&self, locator: &Locator) -> Result<CurrentConditions, WeatherError> {
        let body = self.get("weather", locator).await?;
        provider::parse_current(&body).inspect_err(|e| log_failure("weather", locator, e))
    }

    /// Five-day, three-hour forecast at `locator`
    pub async fn fetch_forecast(&self, locator: &Locator) -> Result<ForecastSeries, WeatherError> {
        let body = self.get("forecast", locator).await?;
        provider::parse_forecast(&body).inspect_err(|e| log_failure("forecast", locator, e))
    }

    fn endpoint_url(&self, endpoint: &str, locator: &Locator) -> String {
        let location = match locator {
            Locator::PlaceName(name) => format!("q={}", urlencoding::encode(name.trim())),
            Locator::Coordinates(coords) => {
                format!("lat={}&lon={}", coords.latitude, coords.longitude)
            }
        };
        format!(
            "{}/{}?{}&appid={}&units={}",
            self.base_url,
            endpoint,
            location,
            urlencoding::encode(&self.api_key),
            self.units.as_query()
        )
    }

    /// Send the request and read the body whatever the HTTP status is;
    /// the provider code inside the body decides success.
    async fn get(&self, endpoint: &str, locator: &Locator) -> Result<String, WeatherError> {
        tracing::debug!(endpoint, locator = %locator, "requesting");

        let url = self.endpoint_url(endpoint, locator);
        let result = async {
            let response = self.client.get(&url).send().await?;
            tracing::debug!(endpoint, status = %response.status(), "response received");
            response.text().await
        }
        .await;

        result.map_err(|e| {
            // reqwest errors embed the URL, which carries the key
            let err = WeatherError::transport(e.without_url().to_string());
            log_failure(endpoint, locator, &err);
            err
        })
    }
}

fn log_failure(endpoint: &str, locator: &Locator, err: &WeatherError) {
    match err {
        WeatherError::Provider { code, message } => {
            tracing::warn!(endpoint, locator = %locator, code, message = %message, "provider rejected request");
        }
        WeatherError::Transport(detail) => {
            tracing::warn!(endpoint, locator = %locator, detail = %detail, "transport failure");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WeatherClient {
        WeatherClient::with_base_url("test-key", Units::Metric, &server.uri(), DEFAULT_TIMEOUT)
            .unwrap()
    }

    fn current_json(name: &str) -> serde_json::Value {
        json!({
            "weather": [{"main": "Clear", "description": "clear sky"}],
            "main": {"temp": 21.4, "temp_min": 19.0, "temp_max": 23.5, "humidity": 40},
            "wind": {"speed": 2.0},
            "dt": 1_709_290_800,
            "sys": {"country": "PT"},
            "name": name,
            "cod": 200
        })
    }

    #[test]
    fn test_endpoint_url_place_name() {
        let client = WeatherClient::with_base_url(
            "k&y",
            Units::Imperial,
            "http://localhost/",
            DEFAULT_TIMEOUT,
        )
        .unwrap();

        let url = client.endpoint_url("weather", &Locator::place(" New York "));
        assert_eq!(
            url,
            "http://localhost/weather?q=New%20York&appid=k%26y&units=imperial"
        );
    }

    #[test]
    fn test_endpoint_url_coordinates() {
        let client = WeatherClient::new("key", Units::Metric).unwrap();
        let url = client.endpoint_url("forecast", &Locator::coords(38.5, -9.25));
        assert_eq!(
            url,
            "https://api.openweathermap.org/data/2.5/forecast?lat=38.5&lon=-9.25&appid=key&units=metric"
        );
    }

    #[tokio::test]
    async fn test_fetch_current_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "Lisbon"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_json("Lisbon")))
            .expect(1)
            .mount(&server)
            .await;

        let current = client_for(&server)
            .fetch_current(&Locator::place("Lisbon"))
            .await
            .unwrap();

        assert_eq!(current.place_name, "Lisbon");
        assert_eq!(current.temperature, 21.4);
    }

    #[tokio::test]
    async fn test_fetch_current_by_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("lat", "38.7"))
            .and(query_param("lon", "-9.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_json("Lisbon")))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_current(&Locator::coords(38.7, -9.1))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_http_404_with_provider_body_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"cod": "404", "message": "city not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_current(&Locator::place("Atlantis"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), Some("city not found"));
    }

    #[tokio::test]
    async fn test_http_200_with_failure_code_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"cod": "400", "message": "wrong latitude"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_forecast(&Locator::coords(999.0, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Provider { code: 400, .. }));
    }

    #[tokio::test]
    async fn test_fetch_forecast_string_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cod": "200",
                "message": 0,
                "list": [{
                    "dt": 1_709_294_400,
                    "main": {"temp": 14.0, "temp_min": 13.0, "temp_max": 15.0, "humidity": 66},
                    "weather": [{"main": "Clouds", "description": "few clouds"}],
                    "wind": {"speed": 5.0}
                }],
                "city": {"name": "Lisbon", "country": "PT"}
            })))
            .mount(&server)
            .await;

        let series = client_for(&server)
            .fetch_forecast(&Locator::place("Lisbon"))
            .await
            .unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.samples()[0].condition_label, "Clouds");
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_forecast(&Locator::place("Lisbon"))
            .await
            .unwrap_err();

        assert!(!err.is_provider());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = WeatherClient::with_base_url(
            "test-key",
            Units::Metric,
            "http://127.0.0.1:9",
            Duration::from_millis(500),
        )
        .unwrap();

        let err = client
            .fetch_current(&Locator::place("Lisbon"))
            .await
            .unwrap_err();

        assert!(matches!(&err, WeatherError::Transport(detail) if !detail.contains("test-key")));
    }

    #[tokio::test]
    async fn test_each_call_issues_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_json("Porto")))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let locator = Locator::place("Porto");
        client.fetch_current(&locator).await.unwrap();
        client.fetch_current(&locator).await.unwrap();
    }
}
