use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::YfError;

/// One OHLCV bar. `ts` is the bar's open time in Unix seconds.
///
/// Prices are split and dividend adjusted unless the request turned
/// `auto_adjust` off. `volume` is `None` where Yahoo reported no trades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub ts: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

/// A corporate action reported alongside the price history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Action {
    /// Cash dividend per share.
    Dividend { ts: i64, amount: f64 },
    /// `numerator` new shares for every `denominator` old ones.
    Split {
        ts: i64,
        numerator: u32,
        denominator: u32,
    },
}

impl Action {
    /// Event timestamp in Unix seconds.
    #[must_use]
    pub const fn ts(&self) -> i64 {
        match *self {
            Self::Dividend { ts, .. } | Self::Split { ts, .. } => ts,
        }
    }
}

/// Exchange details echoed back by the chart endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    /// Short zone name, e.g. `EST`.
    pub timezone: Option<String>,
    /// IANA zone of the listing exchange, e.g. `America/New_York`.
    pub exchange_timezone: Option<String>,
    /// Exchange offset from UTC in seconds.
    pub gmtoffset: Option<i64>,
}

/// Everything a single chart request yields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryResponse {
    pub candles: Vec<Candle>,
    pub actions: Vec<Action>,
    /// Whether `candles` carry adjusted prices.
    pub adjusted: bool,
    pub meta: Option<HistoryMeta>,
    /// Unadjusted closes, one per candle.
    pub raw_close: Option<Vec<f64>>,
}

/// Bar size requested from the chart endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    #[default]
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    const ALL: [Self; 13] = [
        Self::I1m,
        Self::I2m,
        Self::I5m,
        Self::I15m,
        Self::I30m,
        Self::I60m,
        Self::I90m,
        Self::I1h,
        Self::D1,
        Self::D5,
        Self::W1,
        Self::M1,
        Self::M3,
    ];

    /// The code Yahoo expects in the `interval` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I2m => "2m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I30m => "30m",
            Self::I60m => "60m",
            Self::I90m => "90m",
            Self::I1h => "1h",
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
        }
    }

    /// Bars shorter than a session. Only these have pre/post-market data.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(
            self,
            Self::I1m
                | Self::I2m
                | Self::I5m
                | Self::I15m
                | Self::I30m
                | Self::I60m
                | Self::I90m
                | Self::I1h
        )
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = YfError;

    /// Parses the codes yfinance accepts (`"1d"`, `"1wk"`, `"1mo"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| YfError::InvalidParams(format!("unknown interval '{s}'")))
    }
}
