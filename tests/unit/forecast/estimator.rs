//! Unit tests for the trend estimator

use trendix::error::AnalysisError;
use trendix::forecast::{ForestConfig, TrendEstimate};

fn rising_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn short_series_is_rejected_without_fitting() {
    let closes = rising_closes(30);
    let err = TrendEstimate::fit(&closes, 7, &ForestConfig::default())
        .expect_err("short history must not fit");
    match err {
        AnalysisError::DataInsufficient { got, required } => {
            assert_eq!(got, 30);
            assert_eq!(required, 50);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn monotonic_series_forecasts_above_the_last_price() {
    let closes = rising_closes(60);
    let estimate = TrendEstimate::fit(&closes, 7, &ForestConfig::default())
        .expect("valid series fits");
    assert_eq!(estimate.current_price, 159.0);
    assert!(
        estimate.forecast_price > estimate.current_price,
        "clean uptrend must extrapolate upward, got {}",
        estimate.forecast_price
    );
    assert!(estimate.r2_score > 0.9, "r2 was {}", estimate.r2_score);
}

#[test]
fn descending_series_forecasts_below_the_last_price() {
    let closes: Vec<f64> = (0..60).map(|i| 159.0 - i as f64).collect();
    let estimate = TrendEstimate::fit(&closes, 7, &ForestConfig::default())
        .expect("valid series fits");
    assert_eq!(estimate.current_price, 100.0);
    assert!(estimate.forecast_price < estimate.current_price);
}

#[test]
fn identical_inputs_give_bit_identical_forecasts() {
    let closes = rising_closes(80);
    let config = ForestConfig::default();
    let first = TrendEstimate::fit(&closes, 7, &config).expect("fit");
    let second = TrendEstimate::fit(&closes, 7, &config).expect("fit");
    assert_eq!(first.forecast_price.to_bits(), second.forecast_price.to_bits());
    assert_eq!(first.r2_score.to_bits(), second.r2_score.to_bits());
}

#[test]
fn flat_series_scores_zero_r2_and_a_flat_forecast() {
    let closes = vec![100.0; 60];
    let estimate = TrendEstimate::fit(&closes, 7, &ForestConfig::default())
        .expect("flat series still fits");
    assert_eq!(estimate.r2_score, 0.0);
    assert!((estimate.forecast_price - 100.0).abs() < 1e-9);
}
