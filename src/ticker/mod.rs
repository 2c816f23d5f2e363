use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;

use crate::core::{Candle, YfClient, YfError};
use crate::history::HistoryBuilder;
use crate::plot::Chart;

/// A single ticker symbol bound to a client.
///
/// This mirrors the `Ticker` object of the Python `yfinance` library for the
/// subset this crate covers: fetch the price history once, then read values
/// or chart a column of the returned table.
///
/// # Example
///
/// ```no_run
/// # use yfinance_ticker::{Ticker, YfClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YfClient::default();
/// let ticker = Ticker::new(&client, "AAPL");
///
/// // Trailing 365 days up to now.
/// let df = ticker.history_table(None, None).await?;
/// println!("last close: {}", Ticker::last_price(&df, "Close")?);
///
/// let svg = ticker.plot(&df, "Close")?.render_svg()?;
/// std::fs::write("aapl.svg", svg)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: YfClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// A history builder preloaded with this ticker and the given bounds, for
    /// callers that need the interval or adjustment knobs.
    #[must_use]
    pub fn history_builder(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> HistoryBuilder {
        HistoryBuilder::new(&self.client, self.symbol.clone())
            .start(start)
            .end(end)
    }

    /// Daily candles for `[start, end)`; missing bounds default to the trailing 365 days.
    ///
    /// # Errors
    ///
    /// See [`HistoryBuilder::fetch_full`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn history(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Candle>, YfError> {
        self.history_builder(start, end).fetch().await
    }

    /// Same window as [`Ticker::history`], returned as a price table.
    ///
    /// # Errors
    ///
    /// See [`HistoryBuilder::fetch_table`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn history_table(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<DataFrame, YfError> {
        self.history_builder(start, end).fetch_table().await
    }

    /// Column names of a previously fetched table. See [`crate::table::columns`].
    ///
    /// # Errors
    ///
    /// [`YfError::InvalidInput`] if `df` is not a price table.
    pub fn columns(df: &DataFrame) -> Result<Vec<String>, YfError> {
        crate::table::columns(df)
    }

    /// Last available value of `column`. See [`crate::table::last_value`].
    ///
    /// # Errors
    ///
    /// [`YfError::InvalidInput`], [`YfError::ColumnNotFound`] or [`YfError::EmptyTable`].
    pub fn last_price(df: &DataFrame, column: &str) -> Result<f64, YfError> {
        crate::table::last_value(df, column)
    }

    /// Charts `column` of `df`, titled with this ticker's symbol.
    ///
    /// # Errors
    ///
    /// See [`crate::plot::plot`].
    pub fn plot(&self, df: &DataFrame, column: &str) -> Result<Chart, YfError> {
        crate::plot::plot(df, &self.symbol, column)
    }
}
