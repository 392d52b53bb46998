//! Error taxonomy for the analysis pipeline.
//!
//! Every variant is recovered at the analyzer boundary and rendered as a
//! neutral-toned report; none of them may reach a front-end as a fault.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Provider returned nothing usable for the symbol.
    #[error("no data available for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// Fewer usable points than the analysis window requires.
    #[error("insufficient history: {got} points, at least {required} required")]
    DataInsufficient { got: usize, required: usize },

    /// A computation produced a non-finite or undefined value.
    #[error("numeric fault: {0}")]
    NumericFault(String),

    /// Transport failure while talking to the market data provider.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider response could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
