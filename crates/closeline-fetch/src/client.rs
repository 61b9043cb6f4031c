//! HTTP client for the Yahoo Finance chart endpoint.

use closeline_types::{DateRange, FetchGranularity, RawSeries};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::{ParseError, parse_chart, url};

/// Configuration for the chart client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Chart endpoint; the ticker is appended as a path segment.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: url::BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            // The endpoint rejects bare library agents.
            user_agent: format!("Mozilla/5.0 (compatible; closeline/{})", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching a series.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Configured base URL cannot carry a ticker path segment.
    #[error("Invalid chart base URL: {0}")]
    InvalidBaseUrl(String),

    /// Response body could not be turned into a series.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Yahoo Finance chart client.
///
/// Each call issues exactly one request; failures are returned as-is.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    config: ClientConfig,
}

impl YahooClient {
    /// Creates a new chart client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Downloads and parses the close-price chart for one ticker.
    ///
    /// An unknown ticker comes back as an empty series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with an
    /// error status, or the body cannot be parsed.
    pub async fn chart(
        &self,
        ticker: &str,
        range: DateRange,
        granularity: FetchGranularity,
    ) -> Result<RawSeries, FetchError> {
        let url = url::chart_url(&self.config.base_url, ticker, &range, granularity)
            .ok_or_else(|| FetchError::InvalidBaseUrl(self.config.base_url.clone()))?;

        debug!(%url, "requesting chart");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let series = parse_chart(&body)?;
            debug!(points = series.len(), timezone = %series.timezone(), "chart parsed");
            return Ok(series);
        }

        // Error statuses usually carry a chart error envelope; unknown
        // symbols are a 404 with code "Not Found".
        match parse_chart(&body) {
            Ok(series) if status == StatusCode::NOT_FOUND => Ok(series),
            Err(err @ ParseError::Api { .. }) => {
                debug!(status = status.as_u16(), %err, "chart error envelope");
                Err(err.into())
            }
            _ => Err(FetchError::Status {
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use httpmock::prelude::*;

    const BODY: &str = r#"{"chart":{"result":[{
        "meta":{"exchangeTimezoneName":"America/New_York"},
        "timestamp":[1704205800, 1704292200],
        "indicators":{"quote":[{"close":[472.65, 468.79]}]}
    }],"error":null}}"#;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap()
    }

    fn client_for(server: &MockServer) -> YahooClient {
        YahooClient::new(ClientConfig {
            base_url: server.base_url(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, url::BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.contains("closeline/"));
    }

    #[tokio::test]
    async fn test_chart_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/SPY")
                    .query_param("interval", "1d")
                    .query_param("period1", "1704067200")
                    .query_param("period2", "1706659200");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(BODY);
            })
            .await;

        let series = client_for(&server)
            .chart("SPY", range(), FetchGranularity::Daily)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(series.len(), 2);
    }

    #[tokio::test]
    async fn test_chart_unknown_ticker_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/NOPE");
                then.status(404).body(
                    r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
                );
            })
            .await;

        let series = client_for(&server)
            .chart("NOPE", range(), FetchGranularity::Hourly)
            .await
            .unwrap();
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn test_chart_server_error_is_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/SPY");
                then.status(500).body("oops");
            })
            .await;

        let err = client_for(&server)
            .chart("SPY", range(), FetchGranularity::Daily)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 500 }));
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_chart_error_envelope_is_surfaced() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/SPY").query_param("interval", "1h");
                then.status(422).body(
                    r#"{"chart":{"result":null,"error":{"code":"Unprocessable Entity","description":"1h data not available for startTime=1609459200 and endTime=1704067200. The requested range must be within the last 730 days."}}}"#,
                );
            })
            .await;

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .unwrap();
        let err = client_for(&server)
            .chart("SPY", range, FetchGranularity::Hourly)
            .await
            .unwrap_err();

        mock.assert_hits_async(1).await;
        assert!(matches!(
            err,
            FetchError::Parse(ParseError::Api { ref code, .. }) if code == "Unprocessable Entity"
        ));
        assert!(err.to_string().contains("within the last 730 days"));
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let client = YahooClient::new(ClientConfig {
            base_url: "data:text/plain,hello".to_string(),
            ..Default::default()
        })
        .unwrap();

        let err = client
            .chart("SPY", range(), FetchGranularity::Daily)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
    }
}
