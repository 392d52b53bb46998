//! Point forecast and recent goodness-of-fit for a price series.

use crate::error::AnalysisError;
use crate::models::MIN_HISTORY;

use super::forest::{ForestConfig, ForestRegressor};

/// Number of trailing observations the fit quality is scored on. The
/// score deliberately ignores the older history: it measures how well
/// the fitted trend explains the recent regime.
pub const FIT_WINDOW: usize = 50;

/// Fitted trend model evaluated at the requested horizon.
#[derive(Debug, Clone)]
pub struct TrendEstimate {
    pub current_price: f64,
    pub forecast_price: f64,
    pub r2_score: f64,
}

impl TrendEstimate {
    /// Fit the trend model on the full series and evaluate it `horizon`
    /// steps past the last observation.
    ///
    /// The model is a least-squares trend line plus a seeded tree
    /// ensemble over the residuals. Trees alone plateau at the last
    /// observed level and cannot forecast beyond the seen price range;
    /// the line carries the extrapolation while the ensemble captures
    /// the local nonlinear structure.
    pub fn fit(
        closes: &[f64],
        horizon: u32,
        config: &ForestConfig,
    ) -> Result<Self, AnalysisError> {
        let n = closes.len();
        if n < MIN_HISTORY {
            return Err(AnalysisError::DataInsufficient {
                got: n,
                required: MIN_HISTORY,
            });
        }

        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let (slope, intercept) = least_squares(&xs, closes);
        let residuals: Vec<f64> = xs
            .iter()
            .zip(closes)
            .map(|(x, y)| y - (intercept + slope * x))
            .collect();
        let forest = ForestRegressor::fit(&xs, &residuals, config);
        let model = |x: f64| intercept + slope * x + forest.predict(x);

        let current_price = closes[n - 1];
        let forecast_price = model((n + horizon as usize) as f64);
        if !forecast_price.is_finite() {
            return Err(AnalysisError::NumericFault(
                "forecast evaluated to a non-finite value".to_string(),
            ));
        }

        let recent = &closes[n - FIT_WINDOW..];
        let predicted: Vec<f64> = (n - FIT_WINDOW..n).map(|i| model(i as f64)).collect();
        let r2_score = r_squared(recent, &predicted);

        Ok(Self {
            current_price,
            forecast_price,
            r2_score,
        })
    }
}

/// Ordinary least squares over (x, y). A degenerate x spread yields a
/// flat line through the mean.
fn least_squares(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mean_x) * (y - mean_y);
        var += (x - mean_x) * (x - mean_x);
    }
    if var == 0.0 {
        (0.0, mean_y)
    } else {
        let slope = cov / var;
        (slope, mean_y - slope * mean_x)
    }
}

/// Coefficient of determination; 0.0 when the observed window has no
/// variance to explain.
fn r_squared(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len() as f64;
    let mean = observed.iter().sum::<f64>() / n;
    let ss_tot: f64 = observed.iter().map(|y| (y - mean) * (y - mean)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    let ss_res: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p) * (y - p))
        .sum();
    1.0 - ss_res / ss_tot
}
