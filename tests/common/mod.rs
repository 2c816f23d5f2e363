#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use httpmock::{Method::GET, Mock, MockServer};
use polars::prelude::*;
use std::{fs, path::Path};
use url::Url;
use yfinance_ticker::YfClient;

pub fn setup_server() -> MockServer {
    #[cfg(feature = "tracing-subscriber")]
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> YfClient {
    YfClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn mock_history_chart<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{}", symbol));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", symbol, "json"));
    })
}

pub fn mock_chart_body<'a>(server: &'a MockServer, symbol: &'a str, body: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{}", symbol));
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// The window covering every bar in `history_chart_AAPL.json`.
pub fn fixture_window() -> (DateTime<Utc>, DateTime<Utc>) {
    (utc(2024, 1, 1), utc(2024, 1, 10))
}

/// A hand-built price table with the classic OHLCV columns, one row per day
/// starting 2024-01-02.
pub fn ohlcv_table(closes: &[f64]) -> DataFrame {
    let n = closes.len();
    let dates: Vec<i64> = (0..n)
        .map(|i| utc(2024, 1, 2).timestamp_millis() + i as i64 * 86_400_000)
        .collect();
    let date = Series::new("Date".into(), dates)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .unwrap();
    DataFrame::new(vec![
        date.into(),
        Column::new("Open".into(), closes.iter().map(|c| c - 1.0).collect::<Vec<_>>()),
        Column::new("High".into(), closes.iter().map(|c| c + 2.0).collect::<Vec<_>>()),
        Column::new("Low".into(), closes.iter().map(|c| c - 2.0).collect::<Vec<_>>()),
        Column::new("Close".into(), closes.to_vec()),
        Column::new("Volume".into(), vec![1_000_u64; n]),
    ])
    .unwrap()
}
