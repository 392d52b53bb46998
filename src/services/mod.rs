//! External collaborators consumed by the analysis core.

pub mod market_data;
pub mod yahoo;

pub use market_data::MarketDataProvider;
pub use yahoo::YahooChartProvider;
