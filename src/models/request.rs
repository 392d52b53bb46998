//! Per-run analysis parameters collected by the front-ends.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BUDGET: f64 = 1000.0;
pub const DEFAULT_HORIZON: u32 = 7;

/// Sampling granularity of the requested price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

/// History window and bar interval passed to the market data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRange {
    pub period: &'static str,
    pub interval: &'static str,
}

impl TimeUnit {
    /// Parse the short codes used by the front-ends (`m`, `h`, `d`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "m" | "minute" => Some(Self::Minute),
            "h" | "hour" => Some(Self::Hour),
            "d" | "day" => Some(Self::Day),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
        }
    }

    /// Fixed mapping from time unit to provider window and bar interval.
    pub fn history_range(&self) -> HistoryRange {
        match self {
            Self::Minute => HistoryRange {
                period: "1d",
                interval: "1m",
            },
            Self::Hour => HistoryRange {
                period: "7d",
                interval: "60m",
            },
            Self::Day => HistoryRange {
                period: "2y",
                interval: "1d",
            },
        }
    }
}

impl Default for TimeUnit {
    fn default() -> Self {
        Self::Day
    }
}

/// Inputs for one analysis run. Constructed fresh per user action, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub budget: f64,
    pub unit: TimeUnit,
    pub horizon: u32,
}

impl AnalysisRequest {
    /// Build a request from possibly missing or malformed front-end input.
    ///
    /// Out-of-range values (non-finite or non-positive budget, zero
    /// horizon) fall back to the defaults instead of failing the run.
    pub fn from_inputs(
        budget: Option<f64>,
        unit: Option<TimeUnit>,
        horizon: Option<u32>,
    ) -> Self {
        Self {
            budget: budget
                .filter(|b| b.is_finite() && *b > 0.0)
                .unwrap_or(DEFAULT_BUDGET),
            unit: unit.unwrap_or_default(),
            horizon: horizon.filter(|h| *h > 0).unwrap_or(DEFAULT_HORIZON),
        }
    }
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self::from_inputs(None, None, None)
    }
}
