use url::Url;

use crate::core::{Interval, YfClient, YfError};
use crate::history::wire::{ChartEnvelope, ChartError, Events, MetaNode, QuoteBlock};

pub(crate) struct Fetched {
    pub(crate) ts: Vec<i64>,
    pub(crate) quote: QuoteBlock,
    pub(crate) adjclose: Vec<Option<f64>>,
    pub(crate) events: Option<Events>,
    pub(crate) meta: Option<MetaNode>,
}

/// Parameters of one chart request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChartQuery<'a> {
    pub(crate) symbol: &'a str,
    /// `[period1, period2)` in Unix seconds.
    pub(crate) period: (i64, i64),
    pub(crate) interval: Interval,
    pub(crate) events: bool,
    pub(crate) prepost: bool,
}

impl ChartQuery<'_> {
    /// Pre/post-market bars only exist below daily granularity.
    const fn extended_hours(&self) -> bool {
        self.prepost && self.interval.is_intraday()
    }

    fn url(&self, client: &YfClient) -> Result<Url, YfError> {
        let mut url = client.chart_url(self.symbol)?;
        url.query_pairs_mut()
            .append_pair("period1", &self.period.0.to_string())
            .append_pair("period2", &self.period.1.to_string())
            .append_pair("interval", self.interval.as_str())
            .append_pair("includePrePost", if self.extended_hours() { "true" } else { "false" });
        if self.events {
            url.query_pairs_mut().append_pair("events", "div|split");
        }
        Ok(url)
    }
}

/// Sends the query once and decodes the chart payload.
pub(crate) async fn fetch_chart(client: &YfClient, query: ChartQuery<'_>) -> Result<Fetched, YfError> {
    let url = query.url(client)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(%url, "requesting chart");

    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        // Unknown symbols come back as 404 with a chart error payload.
        // An unreadable error body still leaves the status to report.
        let body = match resp.text().await {
            Ok(body) => body,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, %status, "could not read error body");
                String::new()
            }
        };
        return Err(provider_error(&body).map_or_else(
            || YfError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            },
            api_error,
        ));
    }

    let body = crate::core::net::get_text(resp, query.symbol).await?;
    decode_chart(&body)
}

fn provider_error(body: &str) -> Option<ChartError> {
    serde_json::from_str::<ChartEnvelope>(body)
        .ok()?
        .chart?
        .error
}

fn api_error(err: ChartError) -> YfError {
    YfError::Api {
        code: err.code,
        description: err.description,
    }
}

fn decode_chart(body: &str) -> Result<Fetched, YfError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| YfError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| YfError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(api_error(err));
    }

    let mut results = chart
        .result
        .ok_or_else(|| YfError::Data("missing result".into()))?;

    // An empty result list is an empty table, reported as NoData by the caller.
    let Some(r0) = results.pop() else {
        return Ok(Fetched {
            ts: Vec::new(),
            quote: QuoteBlock::default(),
            adjclose: Vec::new(),
            events: None,
            meta: None,
        });
    };

    let ts = r0.timestamp.unwrap_or_default();
    let quote = match r0.indicators.quote.into_iter().next() {
        Some(q) => q,
        None if ts.is_empty() => QuoteBlock::default(),
        None => return Err(YfError::Data("missing quote".into())),
    };
    let adjclose = r0
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|a| a.adjclose)
        .unwrap_or_default();

    Ok(Fetched {
        ts,
        quote,
        adjclose,
        events: r0.events,
        meta: r0.meta,
    })
}
