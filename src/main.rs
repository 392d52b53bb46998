//! Terminal front-end: one-shot analysis of the configured instruments,
//! printed as colored report blocks.

use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use trendix::config::Config;
use trendix::core::analyzer::Analyzer;
use trendix::logging;
use trendix::models::{AnalysisRequest, SignalTone, TimeUnit};
use trendix::services::yahoo::YahooChartProvider;

const RESET: &str = "\x1b[0m";

fn ansi_color(tone: SignalTone) -> &'static str {
    match tone {
        SignalTone::Bullish => "\x1b[32m",
        SignalTone::Bearish => "\x1b[31m",
        SignalTone::Neutral => "\x1b[37m",
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_logging();

    // Malformed or missing values fall back to the defaults.
    let request = AnalysisRequest::from_inputs(
        env::var("BUDGET").ok().and_then(|b| b.parse().ok()),
        env::var("TIMEFRAME").ok().and_then(|u| TimeUnit::from_code(&u)),
        env::var("HORIZON").ok().and_then(|h| h.parse().ok()),
    );
    info!(
        budget = request.budget,
        unit = request.unit.code(),
        horizon = request.horizon,
        "starting analysis run"
    );

    let provider = Arc::new(YahooChartProvider::new());
    let analyzer = Analyzer::new(provider, Config::default());

    for report in analyzer.analyze_all(&request).await {
        println!();
        println!("=== {} ({}) ===", report.label, report.symbol);
        println!("{}{}{}", ansi_color(report.tone), report.text, RESET);
    }
}
