use crate::common;
use polars::prelude::*;
use yfinance_ticker::{YfError, last_value};

#[test]
fn last_value_reads_final_row() {
    let df = common::ohlcv_table(&[10.0, 11.0, 12.5]);
    assert!((last_value(&df, "Close").unwrap() - 12.5).abs() < 1e-12);
    assert!((last_value(&df, "Open").unwrap() - 11.5).abs() < 1e-12);
}

#[test]
fn appending_a_row_changes_the_last_value() {
    let mut df = common::ohlcv_table(&[10.0, 11.0]);
    assert!((last_value(&df, "Close").unwrap() - 11.0).abs() < 1e-12);

    // next session, built with the same schema and shifted two days on
    let next = common::ohlcv_table(&[0.0, 0.0, 42.0]).slice(2, 1);
    df.vstack_mut(&next).unwrap();

    assert_eq!(df.height(), 3);
    assert!((last_value(&df, "Close").unwrap() - 42.0).abs() < 1e-12);
}

#[test]
fn missing_column_is_reported_by_name() {
    let df = common::ohlcv_table(&[1.0]);
    match last_value(&df, "Adj Close") {
        Err(YfError::ColumnNotFound { column }) => assert_eq!(column, "Adj Close"),
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
}

#[test]
fn non_table_input_is_rejected_before_column_lookup() {
    let list = DataFrame::new(vec![Column::new("values".into(), vec![1.0])]).unwrap();
    assert!(matches!(
        last_value(&list, "Close"),
        Err(YfError::InvalidInput(_))
    ));
}

#[test]
fn empty_table_has_no_last_value() {
    let df = common::ohlcv_table(&[]);
    assert!(matches!(last_value(&df, "Close"), Err(YfError::EmptyTable)));
}

#[test]
fn text_column_is_rejected_not_read_as_nan() {
    let mut df = common::ohlcv_table(&[1.0, 2.0]);
    df.with_column(Column::new("Note".into(), vec!["up", "down"]))
        .unwrap();
    match last_value(&df, "Note") {
        Err(YfError::InvalidInput(msg)) => assert!(msg.contains("Note"), "{msg}"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
