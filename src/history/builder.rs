mod actions;
mod adjust;
mod assemble;
mod fetch;

use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;

use crate::core::models::{Candle, HistoryMeta, HistoryResponse};
use crate::core::{Interval, ToDataFrame, YfClient, YfError};
use crate::history::range::DateRange;
use crate::history::wire::MetaNode;

use actions::extract_actions;
use adjust::cumulative_split_after;
use assemble::assemble_candles;
use fetch::{ChartQuery, fetch_chart};

/// A builder for fetching historical price data for a single symbol.
///
/// Without explicit bounds the request covers the trailing 365 days up to
/// the current time. Every `fetch*` call issues exactly one HTTP request; there
/// is no caching and no retry.
///
/// # Example
///
/// ```no_run
/// # use yfinance_ticker::{HistoryBuilder, YfClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YfClient::default();
/// let df = HistoryBuilder::new(&client, "AAPL").fetch_table().await?;
/// println!("{} sessions", df.height());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct HistoryBuilder {
    client: YfClient,
    symbol: String,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: Option<DateTime<Utc>>,
    interval: Interval,
    auto_adjust: bool,
    include_prepost: bool,
    include_actions: bool,
    keepna: bool,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for a given symbol.
    pub fn new(client: &YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            start: None,
            end: None,
            now: None,
            interval: Interval::D1,
            auto_adjust: true,
            include_prepost: false,
            include_actions: true,
            keepna: false,
        }
    }

    /// Sets both ends of the `[start, end)` window.
    #[must_use]
    pub const fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Sets the inclusive start of the window. (Default: 365 days before now)
    #[must_use]
    pub const fn start(mut self, start: Option<DateTime<Utc>>) -> Self {
        self.start = start;
        self
    }

    /// Sets the exclusive end of the window. (Default: now)
    #[must_use]
    pub const fn end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.end = end;
        self
    }

    /// Pins the clock used to fill in missing bounds. (Default: `Utc::now()` at fetch time)
    #[must_use]
    pub const fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Sets the time interval for each data point (candle).
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets whether to automatically adjust prices for splits and dividends. (Default: `true`)
    #[must_use]
    pub const fn auto_adjust(mut self, yes: bool) -> Self {
        self.auto_adjust = yes;
        self
    }

    /// Sets whether to include pre-market and post-market data for intraday intervals. (Default: `false`)
    #[must_use]
    pub const fn prepost(mut self, yes: bool) -> Self {
        self.include_prepost = yes;
        self
    }

    /// Sets whether to include corporate actions (dividends and splits) in the response. (Default: `true`)
    #[must_use]
    pub const fn actions(mut self, yes: bool) -> Self {
        self.include_actions = yes;
        self
    }

    /// Sets whether to keep data rows that have missing OHLC values. (Default: `false`)
    ///
    /// If `true`, missing values are represented as `f64::NAN`. If `false`, rows with any missing
    /// OHLC values are dropped.
    #[must_use]
    pub const fn keepna(mut self, yes: bool) -> Self {
        self.keepna = yes;
        self
    }

    /// The window this builder will request, resolved against `now`.
    #[must_use]
    pub fn date_range(&self) -> DateRange {
        DateRange::resolve(self.start, self.end, self.now.unwrap_or_else(Utc::now))
    }

    /// Executes the request and returns only the price candles.
    ///
    /// # Errors
    ///
    /// See [`HistoryBuilder::fetch_full`].
    pub async fn fetch(self) -> Result<Vec<Candle>, YfError> {
        let resp = self.fetch_full().await?;
        Ok(resp.candles)
    }

    /// Executes the request and returns the history as a price table.
    ///
    /// The frame starts with a `Date` index column followed by `Open`, `High`,
    /// `Low`, `Close`, `Volume`, `Dividends` and `Stock Splits`.
    ///
    /// # Errors
    ///
    /// See [`HistoryBuilder::fetch_full`]; Polars failures surface as [`YfError::Polars`].
    pub async fn fetch_table(self) -> Result<DataFrame, YfError> {
        let resp = self.fetch_full().await?;
        Ok(resp.to_dataframe()?)
    }

    /// Executes the request and returns the full response, including candles, actions, and metadata.
    ///
    /// # Errors
    ///
    /// - [`YfError::InvalidDates`] if the window is empty or inverted.
    /// - [`YfError::NoData`] if no bars fall inside the window.
    /// - [`YfError::Http`], [`YfError::Status`], [`YfError::Api`] or [`YfError::Data`] if the
    ///   provider call fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch_full(self) -> Result<HistoryResponse, YfError> {
        let window = self.date_range();
        let period = window.period()?;

        let query = ChartQuery {
            symbol: &self.symbol,
            period,
            interval: self.interval,
            events: self.include_actions,
            prepost: self.include_prepost,
        };
        let fetched = fetch_chart(&self.client, query).await?;

        // Yahoo may attach events even when none were asked for.
        let (actions, split_events) = if self.include_actions {
            extract_actions(fetched.events.as_ref())
        } else {
            (Vec::new(), Vec::new())
        };
        let cum_split_after = cumulative_split_after(&fetched.ts, &split_events);

        let (candles, raw_close) = assemble_candles(
            &fetched.ts,
            &fetched.quote,
            &fetched.adjclose,
            self.auto_adjust,
            self.keepna,
            &cum_split_after,
        );

        // Yahoo occasionally returns a bar past period2; keep the window strict.
        let (candles, raw_close): (Vec<Candle>, Vec<f64>) = candles
            .into_iter()
            .zip(raw_close)
            .filter(|(c, _)| window.contains_ts(c.ts))
            .unzip();
        let actions = actions
            .into_iter()
            .filter(|a| window.contains_ts(a.ts()))
            .collect();

        if candles.is_empty() {
            return Err(YfError::NoData {
                symbol: self.symbol,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = candles.len(), "history assembled");

        Ok(HistoryResponse {
            candles,
            actions,
            adjusted: self.auto_adjust,
            meta: map_meta(fetched.meta),
            raw_close: Some(raw_close),
        })
    }
}

fn map_meta(m: Option<MetaNode>) -> Option<HistoryMeta> {
    m.map(|mm| HistoryMeta {
        symbol: mm.symbol,
        currency: mm.currency,
        timezone: mm.timezone,
        exchange_timezone: mm.exchange_timezone_name,
        gmtoffset: mm.gmtoffset,
    })
}
