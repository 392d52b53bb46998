//! One-shot analysis orchestration and the error recovery boundary.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{Config, Instrument};
use crate::error::AnalysisError;
use crate::forecast::TrendEstimate;
use crate::metrics::Metrics;
use crate::models::{AnalysisRequest, AnalysisResult, Report};
use crate::report;
use crate::services::market_data::MarketDataProvider;
use crate::signals::SignalEngine;

/// The single `analyze` capability both front-ends consume.
///
/// Holds no state between calls beyond its collaborators; every request
/// is an independent fetch-fit-evaluate-render pass.
pub struct Analyzer {
    provider: Arc<dyn MarketDataProvider>,
    config: Config,
    metrics: Option<Arc<Metrics>>,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: Config) -> Self {
        Self {
            provider,
            config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.config.instruments
    }

    /// Analyze one instrument. Never fails: every error is recovered here
    /// into a neutral-toned report naming the failure.
    pub async fn analyze(&self, instrument: &Instrument, request: &AnalysisRequest) -> Report {
        if let Some(metrics) = &self.metrics {
            metrics.analyses_total.inc();
        }
        match self.run(instrument, request).await {
            Ok(result) => {
                info!(
                    symbol = %instrument.symbol,
                    is_buy = result.is_buy,
                    probability = result.probability,
                    forecast = result.forecast_price,
                    "analysis completed"
                );
                report::success_report(instrument, &result)
            }
            Err(error) => {
                warn!(symbol = %instrument.symbol, error = %error, "analysis failed");
                if let Some(metrics) = &self.metrics {
                    metrics.analysis_failures_total.inc();
                }
                report::error_report(instrument, &error)
            }
        }
    }

    /// Analyze the configured instrument set sequentially, in display
    /// order.
    pub async fn analyze_all(&self, request: &AnalysisRequest) -> Vec<Report> {
        let mut reports = Vec::with_capacity(self.config.instruments.len());
        for instrument in &self.config.instruments {
            reports.push(self.analyze(instrument, request).await);
        }
        reports
    }

    async fn run(
        &self,
        instrument: &Instrument,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AnalysisError> {
        let range = request.unit.history_range();
        let closes = self.provider.fetch_closes(&instrument.symbol, range).await?;
        let estimate = TrendEstimate::fit(&closes, request.horizon, &self.config.forest)?;
        SignalEngine::evaluate(&closes, &estimate, request.budget)
    }
}
