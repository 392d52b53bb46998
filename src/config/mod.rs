//! Runtime configuration and environment helpers.

use serde::{Deserialize, Serialize};

use crate::forecast::ForestConfig;

/// Deployment environment, read from the `ENVIRONMENT` variable.
///
/// Defaults to `sandbox` so a bare `cargo run` behaves like a developer
/// machine.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// One tradable instrument of the fixed analysis set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    pub label: String,
    pub symbol: String,
}

impl Instrument {
    pub fn new(label: &str, symbol: &str) -> Self {
        Self {
            label: label.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Instruments analyzed on every run, in display order.
    pub instruments: Vec<Instrument>,
    pub forest: ForestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instruments: vec![
                Instrument::new("Gold", "GC=F"),
                Instrument::new("Tech 100", "NQ=F"),
                Instrument::new("Bitcoin", "BTC-USD"),
            ],
            forest: ForestConfig::default(),
        }
    }
}
