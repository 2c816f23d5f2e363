use crate::common;
use yfinance_ticker::{Action, HistoryBuilder};

#[tokio::test]
async fn offline_history_uses_recorded_fixture() {
    let server = common::setup_server();
    let mock = common::mock_history_chart(&server, "AAPL");
    let client = common::client_for(&server);
    let (start, end) = common::fixture_window();

    let resp = HistoryBuilder::new(&client, "AAPL")
        .between(start, end)
        .fetch_full()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp.candles.len(), 5);
    assert!(resp.adjusted);
    assert!((resp.candles[0].close - 185.64).abs() < 1e-9);
    assert_eq!(resp.candles[4].volume, Some(42_841_800));
    assert_eq!(
        resp.actions,
        vec![Action::Dividend {
            ts: 1_704_465_000,
            amount: 0.24
        }]
    );
    let meta = resp.meta.expect("meta");
    assert_eq!(meta.timezone.as_deref(), Some("EST"));
    assert_eq!(meta.gmtoffset, Some(-18000));
    assert_eq!(meta.currency.as_deref(), Some("USD"));
    assert_eq!(meta.exchange_timezone.as_deref(), Some("America/New_York"));
}
