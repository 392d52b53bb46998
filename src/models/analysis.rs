//! Analysis outcome models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the signal engine derives from one price series.
///
/// Immutable once produced; owned by the caller that requested it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub is_buy: bool,
    /// Confidence in the signal, clamped to [0.10, 0.98].
    pub probability: f64,
    pub current_price: f64,
    pub forecast_price: f64,
    /// Coefficient of determination over the recent fit window.
    pub r2_score: f64,
    /// Kaufman-style trend cleanliness over the recent window, in [0, 1].
    pub efficiency_ratio: f64,
    /// Capital committed to the signal.
    pub investment: f64,
    /// Take-profit targets, nearest first, offset in the trade direction.
    pub take_profit: [f64; 3],
    pub stop_loss: f64,
    /// Projected profit at TP1..TP3 and the stop-loss, in that order.
    pub level_profits: [f64; 4],
    pub timestamp: DateTime<Utc>,
}

/// Color tone a front-end styles a report with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalTone {
    Bullish,
    Bearish,
    Neutral,
}

/// Rendered analysis for one instrument, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub symbol: String,
    pub label: String,
    pub tone: SignalTone,
    pub text: String,
}
