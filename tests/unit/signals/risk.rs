//! Unit tests for probability blending, sizing and trade levels

use trendix::signals::{
    position_size, probability, projected_profit, trade_levels, volatility,
};

#[test]
fn probability_is_clamped_into_the_confidence_band() {
    assert_eq!(probability(1.0, 1.0), 0.98);
    assert_eq!(probability(0.0, 0.0), 0.10);
    assert_eq!(probability(-3.0, 0.0), 0.10);
}

#[test]
fn probability_blends_fit_and_cleanliness() {
    // (0.7 * 0.8 + 0.3 * 0.5) * 0.95
    let p = probability(0.8, 0.5);
    assert!((p - 0.6745).abs() < 1e-12, "probability was {p}");
}

#[test]
fn volatility_is_the_population_standard_deviation() {
    let mut closes = vec![2.0; 10];
    closes.extend(vec![4.0; 10]);
    assert!((volatility(&closes) - 1.0).abs() < 1e-12);
}

#[test]
fn volatility_only_sees_the_trailing_window() {
    let mut closes = vec![1000.0; 30];
    closes.extend(vec![2.0; 10]);
    closes.extend(vec![4.0; 10]);
    assert!((volatility(&closes) - 1.0).abs() < 1e-12);
}

#[test]
fn position_size_risks_at_most_a_tenth_of_the_budget() {
    assert!((position_size(1000.0, 0.5) - 50.0).abs() < 1e-12);
    assert!((position_size(1000.0, 0.98) - 98.0).abs() < 1e-12);
    assert!(position_size(1000.0, 0.98) < 1000.0 * 0.1 + 1e-12);
}

#[test]
fn buy_levels_step_away_above_the_entry() {
    let levels = trade_levels(100.0, 2.0, 1.0);
    let [tp1, tp2, tp3] = levels.take_profit;
    assert!(tp1 < tp2 && tp2 < tp3);
    assert!(tp1 > 100.0);
    assert!(levels.stop_loss < 100.0);
    assert!((tp1 - 101.6).abs() < 1e-12);
    assert!((levels.stop_loss - 97.6).abs() < 1e-12);
}

#[test]
fn sell_levels_mirror_below_the_entry() {
    let levels = trade_levels(100.0, 2.0, -1.0);
    let [tp1, tp2, tp3] = levels.take_profit;
    assert!(tp1 > tp2 && tp2 > tp3);
    assert!(tp1 < 100.0);
    assert!(levels.stop_loss > 100.0);
}

#[test]
fn favorable_moves_project_positive_profit_in_both_directions() {
    // Long: target above entry.
    assert!(projected_profit(95.0, 100.0, 104.0, 1.0) > 0.0);
    // Short: target below entry.
    assert!(projected_profit(95.0, 100.0, 96.0, -1.0) > 0.0);
    // Stops land on the adverse side.
    assert!(projected_profit(95.0, 100.0, 97.6, 1.0) < 0.0);
    assert!(projected_profit(95.0, 100.0, 102.4, -1.0) < 0.0);
}

#[test]
fn projected_profit_matches_the_relative_move() {
    // 4% favorable move on a 95 EUR position.
    let profit = projected_profit(95.0, 100.0, 104.0, 1.0);
    assert!((profit - 3.8).abs() < 1e-12);
}
