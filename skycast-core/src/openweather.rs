use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{error::Error, model::CurrentWeather};

/// OpenWeather current-weather endpoint.
pub const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeather city-name endpoint.
///
/// Issues exactly one request per call, with the default reqwest timeouts
/// and redirect policy. Errors are returned, never printed or exited on.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Point the client at a different endpoint, e.g. a local test server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Full GET URL for a city query. Units are fixed to metric and the
    /// city name is percent-encoded; the key is inserted as-is.
    pub fn query_url(&self, city: &str) -> String {
        format!(
            "{}?q={}&units=metric&appid={}",
            self.base_url,
            urlencoding::encode(city),
            self.api_key,
        )
    }

    /// Fetch current weather for a city.
    pub async fn current(&self, city: &str) -> Result<CurrentWeather, Error> {
        debug!(city, "requesting current weather");

        let res = self.http.get(self.query_url(city)).send().await?;

        let status = res.status();
        debug!(%status, "weather endpoint answered");

        match status {
            StatusCode::UNAUTHORIZED => return Err(Error::AccessDenied),
            StatusCode::NOT_FOUND => return Err(Error::CityNotFound),
            s if !s.is_success() => return Err(Error::UpstreamStatus(s.as_u16())),
            _ => {}
        }

        let body = res.text().await?;
        serde_json::from_str(&body).map_err(|_| Error::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenWeatherClient {
        OpenWeatherClient::new("KEY")
    }

    #[test]
    fn query_url_is_deterministic() {
        assert_eq!(client().query_url("Paris"), client().query_url("Paris"));
    }

    #[test]
    fn query_url_targets_the_city_endpoint_with_metric_units() {
        let url = client().query_url("Paris");

        assert!(url.starts_with(BASE_URL));
        assert!(url.contains("q=Paris"));
        assert!(url.contains("units=metric"));
        assert!(url.contains("appid=KEY"));
    }

    #[test]
    fn city_names_are_percent_encoded_and_round_trip() {
        let url = client().query_url("São Paulo");
        assert!(url.contains("q=S%C3%A3o%20Paulo"));

        let encoded = url
            .split("q=")
            .nth(1)
            .and_then(|rest| rest.split('&').next())
            .expect("url has a q parameter");
        let decoded = urlencoding::decode(encoded).expect("valid percent encoding");
        assert_eq!(decoded, "São Paulo");
    }

    #[test]
    fn distinct_city_names_produce_distinct_urls() {
        assert_ne!(client().query_url("Vienna"), client().query_url("Wien"));
        // '+' must not collide with an encoded space
        assert_ne!(client().query_url("a b"), client().query_url("a+b"));
    }
}
