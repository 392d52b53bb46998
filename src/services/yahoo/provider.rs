//! HTTP implementation of the market data contract.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use tracing::debug;
use url::Url;

use crate::error::AnalysisError;
use crate::models::HistoryRange;
use crate::services::market_data::MarketDataProvider;

use super::messages::{ChartEnvelope, ChartResponse};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const RETRY_ATTEMPTS: usize = 2;

/// Historical closes from a Yahoo-style chart endpoint. The base URL is
/// injectable so tests can point the provider at a mock server.
pub struct YahooChartProvider {
    base_url: String,
    client: reqwest::Client,
}

impl YahooChartProvider {
    pub fn new() -> Self {
        Self::with_client(DEFAULT_BASE_URL.to_string(), reqwest::Client::new())
    }

    pub fn with_client(base_url: String, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn fetch_once(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<f64>, AnalysisError> {
        let endpoint = Url::parse(&format!("{}/v8/finance/chart/{}", self.base_url, symbol))
            .map_err(|e| AnalysisError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("invalid endpoint: {e}"),
            })?;

        debug!(symbol = symbol, period = range.period, interval = range.interval, "fetching closes");

        let response = self
            .client
            .get(endpoint)
            .query(&[
                ("range", range.period),
                ("interval", range.interval),
                ("includePrePost", "false"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: ChartResponse = response.json().await?;
        let ChartEnvelope { result, error } = payload.chart;

        let result = result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| AnalysisError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: error
                    .map(|e| format!("{}: {}", e.code, e.description))
                    .unwrap_or_else(|| "empty chart response".to_string()),
            })?;

        let closes: Vec<f64> = result
            .indicators
            .quote
            .first()
            .map(|quote| {
                quote
                    .close
                    .iter()
                    .filter_map(|close| *close)
                    .filter(|close| close.is_finite())
                    .collect()
            })
            .unwrap_or_default();

        if closes.is_empty() {
            return Err(AnalysisError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "no usable closing prices".to_string(),
            });
        }
        Ok(closes)
    }
}

impl Default for YahooChartProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooChartProvider {
    async fn fetch_closes(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<f64>, AnalysisError> {
        // Transport failures are retried with bounded backoff; typed
        // data failures are returned as-is.
        (|| self.fetch_once(symbol, range))
            .retry(ExponentialBuilder::default().with_max_times(RETRY_ATTEMPTS))
            .when(|error| matches!(error, AnalysisError::Network(_)))
            .await
    }
}
