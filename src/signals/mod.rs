//! Signal and risk derivation from a fitted trend estimate.

pub mod efficiency;
pub mod engine;
pub mod risk;

pub use efficiency::{efficiency_ratio, EFFICIENCY_WINDOW};
pub use engine::SignalEngine;
pub use risk::{position_size, probability, projected_profit, trade_levels, volatility, TradeLevels, VOLATILITY_WINDOW};
