//! yfinance-ticker: Yahoo Finance price history as Polars tables, with charts.
//!
//! Fetch the daily history of one symbol from the chart v8 endpoint, read it as a
//! time-indexed [`DataFrame`](polars::prelude::DataFrame), look up the latest value
//! of a column, and build a line chart of a column over time.
//!
//! ```no_run
//! # use yfinance_ticker::{HistoryBuilder, YfClient, last_value, plot};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = YfClient::default();
//! let df = HistoryBuilder::new(&client, "MSFT").fetch_table().await?;
//!
//! let close = last_value(&df, "Close")?;
//! let chart = plot(&df, "MSFT", "Close")?;
//! assert_eq!(chart.title(), "Historical data for MSFT - Close");
//! # let _ = close;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod history;
pub mod plot;
pub mod table;
pub mod ticker;

pub use crate::core::{
    Action, Candle, HistoryMeta, HistoryResponse, Interval, ToDataFrame, YfClient,
    YfClientBuilder, YfError,
};
pub use history::{DateRange, HistoryBuilder};
pub use plot::{Chart, plot};
pub use table::{PriceTable, columns, last_value};
pub use ticker::Ticker;
