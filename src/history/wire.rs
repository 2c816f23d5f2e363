//! Serde view of the chart v8 payload. Only the fields the history pipeline
//! reads are modelled; everything else is ignored.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ChartError>,
}

#[derive(Deserialize)]
pub(crate) struct ChartError {
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct ChartResult {
    pub(crate) meta: Option<MetaNode>,
    pub(crate) timestamp: Option<Vec<i64>>,
    pub(crate) indicators: Indicators,
    pub(crate) events: Option<Events>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct MetaNode {
    pub(crate) symbol: Option<String>,
    pub(crate) currency: Option<String>,
    pub(crate) timezone: Option<String>,
    pub(crate) exchange_timezone_name: Option<String>,
    pub(crate) gmtoffset: Option<i64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct Indicators {
    pub(crate) quote: Vec<QuoteBlock>,
    pub(crate) adjclose: Vec<AdjCloseBlock>,
}

/// Column-major OHLCV arrays; `null` marks a missing cell.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct QuoteBlock {
    pub(crate) open: Vec<Option<f64>>,
    pub(crate) high: Vec<Option<f64>>,
    pub(crate) low: Vec<Option<f64>>,
    pub(crate) close: Vec<Option<f64>>,
    pub(crate) volume: Vec<Option<u64>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct AdjCloseBlock {
    pub(crate) adjclose: Vec<Option<f64>>,
}

/// Events keyed by their timestamp rendered as a string.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct Events {
    pub(crate) dividends: BTreeMap<String, DividendEvent>,
    pub(crate) splits: BTreeMap<String, SplitEvent>,
}

#[derive(Deserialize)]
pub(crate) struct DividendEvent {
    pub(crate) amount: Option<f64>,
    pub(crate) date: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SplitEvent {
    #[serde(default, deserialize_with = "share_count")]
    pub(crate) numerator: Option<u32>,
    #[serde(default, deserialize_with = "share_count")]
    pub(crate) denominator: Option<u32>,
    pub(crate) split_ratio: Option<String>,
    pub(crate) date: Option<i64>,
}

/// Split legs show up as integers, whole floats (`4.0`) or strings (`"4"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Int(u64),
    Float(f64),
    Text(String),
}

fn share_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(raw) = Option::<RawCount>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let n = match raw {
        RawCount::Int(n) => n,
        RawCount::Float(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => {
            format!("{f:.0}").parse::<u64>().map_err(D::Error::custom)?
        }
        RawCount::Float(f) => {
            return Err(D::Error::custom(format!("split leg {f} is not a whole number")));
        }
        RawCount::Text(s) if s.trim().is_empty() => return Ok(None),
        RawCount::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("split leg '{s}' is not a number")))?,
    };
    u32::try_from(n)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("split leg {n} out of range")))
}
