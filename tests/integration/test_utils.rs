use std::sync::Arc;
use std::time::Instant;

use axum_test::TestServer;
use serde_json::json;
use tokio::sync::RwLock;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trendix::config::Config;
use trendix::core::analyzer::Analyzer;
use trendix::core::http::{create_router, AppState, HealthStatus};
use trendix::metrics::Metrics;
use trendix::services::yahoo::YahooChartProvider;

/// Closing prices that produce a clean bullish analysis.
pub fn rising_closes(count: usize) -> Vec<Option<f64>> {
    (0..count).map(|i| Some(100.0 + i as f64)).collect()
}

pub fn chart_payload(closes: &[Option<f64>]) -> serde_json::Value {
    json!({
        "chart": {
            "result": [{
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    })
}

/// Mount a chart endpoint answering every symbol with the given closes.
pub async fn mock_chart(server: &MockServer, closes: &[Option<f64>]) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/v8/finance/chart/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_payload(closes)))
        .mount(server)
        .await;
}

/// Mount a chart endpoint answering with the provider's own error shape.
pub async fn mock_chart_error(server: &MockServer, code: &str, description: &str) {
    let body = json!({
        "chart": {
            "result": null,
            "error": { "code": code, "description": description }
        }
    });
    Mock::given(method("GET"))
        .and(path_regex(r"^/v8/finance/chart/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub fn provider_for(server: &MockServer) -> YahooChartProvider {
    YahooChartProvider::with_client(server.uri(), reqwest::Client::new())
}

pub fn analyzer_for(server: &MockServer) -> Analyzer {
    Analyzer::new(Arc::new(provider_for(server)), Config::default())
}

/// Helper structure bundling together the HTTP server and the mocked
/// chart API behind it.
#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub chart_api: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_closes(rising_closes(60)).await
    }

    pub async fn with_closes(closes: Vec<Option<f64>>) -> Self {
        let chart_api = MockServer::start().await;
        mock_chart(&chart_api, &closes).await;

        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let analyzer = Arc::new(
            Analyzer::new(Arc::new(provider_for(&chart_api)), Config::default())
                .with_metrics(metrics.clone()),
        );

        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            analyzer,
        };

        let server = TestServer::new(create_router(state)).expect("start test server");

        Self {
            server,
            metrics,
            chart_api,
        }
    }
}
