//! Probability blending, position sizing and trade level derivation.

pub const VOLATILITY_WINDOW: usize = 20;

const FIT_WEIGHT: f64 = 0.7;
const EFFICIENCY_WEIGHT: f64 = 0.3;
const PRUDENCE_DISCOUNT: f64 = 0.95;
const PROBABILITY_FLOOR: f64 = 0.10;
const PROBABILITY_CEILING: f64 = 0.98;
const MAX_BUDGET_FRACTION: f64 = 0.1;
const TP_MULTIPLIERS: [f64; 3] = [0.8, 1.5, 2.5];
const SL_MULTIPLIER: f64 = 1.2;

/// Take-profit targets (nearest first) and stop-loss around an entry.
#[derive(Debug, Clone, Copy)]
pub struct TradeLevels {
    pub take_profit: [f64; 3],
    pub stop_loss: f64,
}

/// Blend long-run fit quality with recent trend cleanliness, apply the
/// prudence discount and clamp into the realistic confidence band. The
/// score never claims near-certainty or near-zero confidence.
pub fn probability(r2_score: f64, efficiency_ratio: f64) -> f64 {
    ((FIT_WEIGHT * r2_score + EFFICIENCY_WEIGHT * efficiency_ratio) * PRUDENCE_DISCOUNT)
        .clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING)
}

/// Population standard deviation of the last [`VOLATILITY_WINDOW`] closes.
pub fn volatility(closes: &[f64]) -> f64 {
    let window = if closes.len() > VOLATILITY_WINDOW {
        &closes[closes.len() - VOLATILITY_WINDOW..]
    } else {
        closes
    };
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    let variance = window.iter().map(|y| (y - mean) * (y - mean)).sum::<f64>() / n;
    variance.sqrt()
}

/// At most 10% of the budget, scaled down further by confidence.
pub fn position_size(budget: f64, probability: f64) -> f64 {
    budget * probability * MAX_BUDGET_FRACTION
}

/// Price levels offset from the entry in the trade direction, scaled by
/// recent volatility. `direction` is +1.0 for a buy, -1.0 for a sell.
pub fn trade_levels(current_price: f64, volatility: f64, direction: f64) -> TradeLevels {
    let take_profit =
        TP_MULTIPLIERS.map(|multiplier| current_price + volatility * multiplier * direction);
    TradeLevels {
        take_profit,
        stop_loss: current_price - volatility * SL_MULTIPLIER * direction,
    }
}

/// Projected profit when the position is closed at `target`; signed so a
/// favorable move yields a positive number regardless of direction.
pub fn projected_profit(investment: f64, current_price: f64, target: f64, direction: f64) -> f64 {
    investment * ((target - current_price) / current_price) * direction
}
