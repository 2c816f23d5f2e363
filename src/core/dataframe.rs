use polars::prelude::*;

use crate::core::models::{Action, Candle, HistoryResponse};

/// Name of the time index column every price table starts with.
pub const INDEX_COLUMN: &str = "Date";

/// Trait for converting fetched data structures into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    ///
    /// # Errors
    ///
    /// Propagates Polars errors raised while assembling the columns.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Returns the column layout produced by [`ToDataFrame::to_dataframe`].
    fn schema() -> Vec<(&'static str, DataType)>
    where
        Self: Sized;
}

impl ToDataFrame for HistoryResponse {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let candles = &self.candles;
        let dates: Vec<i64> = candles.iter().map(|c| c.ts * 1000).collect();
        let (dividends, splits) = actions_per_row(candles, &self.actions);

        let date = Series::new(INDEX_COLUMN.into(), dates)
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

        let columns: Vec<Column> = vec![
            date.into(),
            Column::new("Open".into(), candles.iter().map(|c| c.open).collect::<Vec<_>>()),
            Column::new("High".into(), candles.iter().map(|c| c.high).collect::<Vec<_>>()),
            Column::new("Low".into(), candles.iter().map(|c| c.low).collect::<Vec<_>>()),
            Column::new("Close".into(), candles.iter().map(|c| c.close).collect::<Vec<_>>()),
            Column::new(
                "Volume".into(),
                candles.iter().map(|c| c.volume).collect::<Vec<Option<u64>>>(),
            ),
            Column::new("Dividends".into(), dividends),
            Column::new("Stock Splits".into(), splits),
        ];

        DataFrame::new(columns)
    }

    fn schema() -> Vec<(&'static str, DataType)> {
        vec![
            (
                INDEX_COLUMN,
                DataType::Datetime(TimeUnit::Milliseconds, None),
            ),
            ("Open", DataType::Float64),
            ("High", DataType::Float64),
            ("Low", DataType::Float64),
            ("Close", DataType::Float64),
            ("Volume", DataType::UInt64),
            ("Dividends", DataType::Float64),
            ("Stock Splits", DataType::Float64),
        ]
    }
}

/// Spread actions onto the bar that contains them: dividends are summed,
/// split ratios multiplied. Bars without events get `0.0` in both columns.
fn actions_per_row(candles: &[Candle], actions: &[Action]) -> (Vec<f64>, Vec<f64>) {
    let mut dividends = vec![0.0; candles.len()];
    let mut splits = vec![0.0; candles.len()];

    for action in actions {
        let idx = candles.partition_point(|c| c.ts <= action.ts());
        if idx == 0 {
            continue;
        }
        let row = idx - 1;
        match *action {
            Action::Dividend { amount, .. } => dividends[row] += amount,
            Action::Split {
                numerator,
                denominator,
                ..
            } => {
                if denominator == 0 {
                    continue;
                }
                let ratio = f64::from(numerator) / f64::from(denominator);
                splits[row] = if splits[row] == 0.0 {
                    ratio
                } else {
                    splits[row] * ratio
                };
            }
        }
    }

    (dividends, splits)
}
