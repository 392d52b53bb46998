//! Market data provider interface.

use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::models::HistoryRange;

/// Historical-quote source the analyzer pulls closing prices from.
///
/// Implementations own all transport concerns (latency, retries); the
/// core only sees a usable series or a typed failure.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Closing prices for a symbol over the given window, oldest first.
    /// Missing-value placeholders must be dropped before returning.
    async fn fetch_closes(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<f64>, AnalysisError>;
}
