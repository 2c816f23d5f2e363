use crate::common;
use yfinance_ticker::{Action, HistoryBuilder, Interval};

// t1 (before a 2:1 split), t2 (split date), t3 (dividend date); the window is
// 1970-01-01 .. 1970-01-02 so the synthetic second timestamps stay inside it.
const BODY: &str = r#"{
  "chart":{
    "result":[
      {
        "timestamp":[1000,2000,3000],
        "indicators":{
          "quote":[{
            "open":[100.0,100.0,100.0],
            "high":[101.0,101.0,101.0],
            "low":[99.0,99.0,99.0],
            "close":[100.0,100.0,100.0],
            "volume":[10,10,10]
          }],
          "adjclose":[{"adjclose":[50.0,100.0,99.0]}]
        },
        "events":{
          "splits":{"2000":{"date":2000,"numerator":2,"denominator":1}},
          "dividends":{"3000":{"date":3000,"amount":1.0}}
        }
      }
    ],
    "error":null
  }
}"#;

const SPLIT_ONLY_BODY: &str = r#"{
  "chart":{
    "result":[
      {
        "timestamp":[1000,2000],
        "indicators":{
          "quote":[{
            "open":[100.0,50.0],
            "high":[100.0,50.0],
            "low":[100.0,50.0],
            "close":[100.0,50.0],
            "volume":[10,20]
          }]
        },
        "events":{
          "splits":{"2000":{"date":2000,"splitRatio":"2:1"}}
        }
      }
    ],
    "error":null
  }
}"#;

fn epoch_day() -> (chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>) {
    (common::utc(1970, 1, 1), common::utc(1970, 1, 2))
}

#[tokio::test]
async fn history_auto_adjust_and_actions() {
    let server = common::setup_server();
    let mock = common::mock_chart_body(&server, "TEST", BODY);
    let client = common::client_for(&server);
    let (start, end) = epoch_day();

    let resp = HistoryBuilder::new(&client, "TEST")
        .between(start, end)
        .interval(Interval::D1)
        .auto_adjust(true)
        .fetch_full()
        .await
        .unwrap();
    mock.assert();

    assert!(resp.adjusted);
    assert_eq!(resp.candles.len(), 3);

    // prices halved, volume doubled due to the 2:1 split after this candle
    let c0 = &resp.candles[0];
    assert!((c0.open - 50.0).abs() < 1e-9);
    assert!((c0.high - 50.5).abs() < 1e-9);
    assert!((c0.low - 49.5).abs() < 1e-9);
    assert!((c0.close - 50.0).abs() < 1e-9);
    assert_eq!(c0.volume, Some(20));

    let c1 = &resp.candles[1];
    assert!((c1.close - 100.0).abs() < 1e-9);
    assert_eq!(c1.volume, Some(10));

    // dividend -> adjclose=99 => factor 0.99
    let c2 = &resp.candles[2];
    assert!((c2.close - 99.0).abs() < 1e-9);
    assert_eq!(resp.raw_close, Some(vec![100.0, 100.0, 100.0]));

    assert_eq!(resp.actions.len(), 2);
    assert!(matches!(resp.actions[0], Action::Split { ts, numerator: 2, denominator: 1 } if ts == 2000));
    assert!(matches!(resp.actions[1], Action::Dividend { ts, amount } if ts == 3000 && (amount - 1.0).abs() < 1e-9));
}

#[tokio::test]
async fn adjust_from_splits_only_when_adjclose_missing() {
    let server = common::setup_server();
    let mock = common::mock_chart_body(&server, "SPLT", SPLIT_ONLY_BODY);
    let client = common::client_for(&server);
    let (start, end) = epoch_day();

    let bars = HistoryBuilder::new(&client, "SPLT")
        .between(start, end)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert!((bars[0].close - 50.0).abs() < 1e-9);
    assert_eq!(bars[0].volume, Some(20));
    assert!((bars[1].close - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn auto_adjust_off_returns_raw_prices() {
    let server = common::setup_server();
    let mock = common::mock_chart_body(&server, "TEST", BODY);
    let client = common::client_for(&server);
    let (start, end) = epoch_day();

    let resp = HistoryBuilder::new(&client, "TEST")
        .between(start, end)
        .auto_adjust(false)
        .fetch_full()
        .await
        .unwrap();
    mock.assert();

    assert!(!resp.adjusted);
    assert!(resp.candles.iter().all(|c| (c.close - 100.0).abs() < 1e-9));
    assert_eq!(resp.candles[0].volume, Some(10));
}
