use crate::common;
use httpmock::Method::GET;
use yfinance_ticker::{HistoryBuilder, Interval};

#[tokio::test]
async fn explicit_window_is_sent_as_period() {
    let server = common::setup_server();
    let (start, end) = common::fixture_window();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("period1", start.timestamp().to_string())
            .query_param("period2", end.timestamp().to_string())
            .query_param("interval", "1d")
            .query_param("events", "div|split")
            .query_param("includePrePost", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let _ = HistoryBuilder::new(&client, "AAPL")
        .between(start, end)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn default_window_is_trailing_year_before_now() {
    let server = common::setup_server();
    let now = common::utc(2024, 1, 10);
    let year_ago = common::utc(2023, 1, 10);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("period1", year_ago.timestamp().to_string())
            .query_param("period2", now.timestamp().to_string());
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let builder = HistoryBuilder::new(&client, "AAPL").now(now);
    let range = builder.date_range();
    assert_eq!(range.start, year_ago);
    assert_eq!(range.end, now);

    let bars = builder.fetch().await.unwrap();
    mock.assert();
    assert_eq!(bars.len(), 5);
}

#[test]
fn default_window_tracks_wall_clock() {
    let client = yfinance_ticker::YfClient::default();
    let before = chrono::Utc::now();
    let range = HistoryBuilder::new(&client, "AAPL").date_range();
    let after = chrono::Utc::now();

    assert!(range.end >= before && range.end <= after);
    let span = range.end - range.start;
    assert_eq!(span.num_days(), 365);
}

#[tokio::test]
async fn interval_actions_and_prepost_flags_reach_the_query() {
    let server = common::setup_server();
    let (start, end) = common::fixture_window();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("interval", "1h")
            .query_param("includePrePost", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let _ = HistoryBuilder::new(&client, "AAPL")
        .between(start, end)
        .interval(Interval::I1h)
        .actions(false)
        .prepost(true)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn prepost_is_not_sent_for_weekly_bars() {
    let server = common::setup_server();
    let (start, end) = common::fixture_window();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("interval", "1wk")
            .query_param("includePrePost", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let _ = HistoryBuilder::new(&client, "AAPL")
        .between(start, end)
        .interval(Interval::W1)
        .prepost(true)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}
