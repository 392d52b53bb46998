//! Assembles the trend estimate and risk math into one analysis result.

use chrono::Utc;

use crate::error::AnalysisError;
use crate::forecast::TrendEstimate;
use crate::models::{AnalysisResult, MIN_HISTORY};

use super::efficiency::efficiency_ratio;
use super::risk;

pub struct SignalEngine;

impl SignalEngine {
    /// Derive the directional signal, confidence and trade levels from a
    /// price series and its fitted trend estimate.
    pub fn evaluate(
        closes: &[f64],
        estimate: &TrendEstimate,
        budget: f64,
    ) -> Result<AnalysisResult, AnalysisError> {
        if closes.len() < MIN_HISTORY {
            return Err(AnalysisError::DataInsufficient {
                got: closes.len(),
                required: MIN_HISTORY,
            });
        }
        if !estimate.current_price.is_finite()
            || !estimate.forecast_price.is_finite()
            || estimate.current_price == 0.0
        {
            return Err(AnalysisError::NumericFault(
                "trend estimate contains unusable prices".to_string(),
            ));
        }

        let efficiency = efficiency_ratio(closes);
        let probability = risk::probability(estimate.r2_score, efficiency);
        let is_buy = estimate.forecast_price > estimate.current_price;
        let direction = if is_buy { 1.0 } else { -1.0 };
        let volatility = risk::volatility(closes);
        let investment = risk::position_size(budget, probability);
        let levels = risk::trade_levels(estimate.current_price, volatility, direction);

        let profit_at = |target: f64| {
            risk::projected_profit(investment, estimate.current_price, target, direction)
        };
        let level_profits = [
            profit_at(levels.take_profit[0]),
            profit_at(levels.take_profit[1]),
            profit_at(levels.take_profit[2]),
            profit_at(levels.stop_loss),
        ];

        Ok(AnalysisResult {
            is_buy,
            probability,
            current_price: estimate.current_price,
            forecast_price: estimate.forecast_price,
            r2_score: estimate.r2_score,
            efficiency_ratio: efficiency,
            investment,
            take_profit: levels.take_profit,
            stop_loss: levels.stop_loss,
            level_profits,
            timestamp: Utc::now(),
        })
    }
}
