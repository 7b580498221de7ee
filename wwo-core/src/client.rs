use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace};

use crate::{
    Config, WeatherError,
    de::Object,
    model::{WeatherEnvelope, WeatherQuery, WeatherReport},
};

pub const BASE_URL: &str = "http://free.worldweatheronline.com/feed/weather.ashx";

const REDACTED: &str = "<redacted>";

/// Render the feed URL for `location`.
///
/// Both values are appended as given, without percent-encoding.
pub fn build_url(location: &str, api_key: &str) -> String {
    format!("{BASE_URL}?format=json&num_of_days=5&key={api_key}&q={location}")
}

/// [`build_url`] with the key replaced, for logs.
fn loggable_url(query: &WeatherQuery) -> String {
    build_url(&query.location, REDACTED)
}

/// Decode a raw feed body into a [`WeatherReport`].
///
/// The body and every record in it must be JSON objects; `null` reads as empty.
pub fn parse(body: &[u8]) -> Result<WeatherReport, WeatherError> {
    let Object(envelope): Object<WeatherEnvelope> =
        serde_json::from_slice(body).map_err(WeatherError::Parse)?;
    let report = envelope.data;

    trace!(
        current = report.current_condition.len(),
        request = report.request.len(),
        days = report.weather.len(),
        "decoded weather report"
    );

    Ok(report)
}

/// Transport that turns a URL into a response body.
#[async_trait]
pub trait Fetch: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, WeatherError>;
}

/// Plain `GET` over reqwest. The HTTP status is not inspected.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    pub fn from_client(http: Client) -> Self {
        Self { http }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build().map_err(WeatherError::Network)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, WeatherError> {
        let res = self.http.get(url).send().await.map_err(WeatherError::Network)?;

        let status = res.status();
        let body = res.bytes().await.map_err(WeatherError::EmptyResponse)?;

        debug!(%status, bytes = body.len(), "weather API responded");
        Ok(body.to_vec())
    }
}

/// Builds the URL, fetches it and decodes the result.
#[derive(Debug, Clone, Default)]
pub struct WeatherClient<F = HttpFetcher> {
    fetcher: F,
}

impl WeatherClient {
    pub fn new() -> Self {
        Self { fetcher: HttpFetcher::new() }
    }

    /// Client honoring the configured request timeout, if any.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let fetcher = match config.timeout() {
            Some(timeout) => HttpFetcher::with_timeout(timeout)?,
            None => HttpFetcher::new(),
        };

        Ok(Self { fetcher })
    }
}

impl<F: Fetch> WeatherClient<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn get_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        debug!(url = %loggable_url(query), "requesting weather");

        let url = build_url(&query.location, &query.api_key);
        let body = self.fetcher.fetch(&url).await?;

        parse(&body)
    }
}

/// One-shot lookup with a default client.
pub async fn get_weather(location: &str, api_key: &str) -> Result<WeatherReport, WeatherError> {
    WeatherClient::new().get_weather(&WeatherQuery::new(location, api_key)).await
}
