//! HTTP client and its builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::YfError;

/// Chart v8 endpoint; the symbol is appended as the last path segment.
pub const DEFAULT_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Yahoo rejects requests without a browser-like agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36";

/// Handle used for every chart request.
///
/// Cloning shares the connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: Client,
    chart_base: Url,
}

impl Default for YfClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YfClient {
    #[must_use]
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    /// Chart URL for `symbol`, without query parameters.
    pub(crate) fn chart_url(&self, symbol: &str) -> Result<Url, YfError> {
        let mut url = self.chart_base.clone();
        url.path_segments_mut()
            .map_err(|()| YfError::Data(format!("chart base {} cannot take a path", self.chart_base)))?
            .pop_if_empty()
            .push(symbol);
        Ok(url)
    }
}

/// Configures a [`YfClient`].
///
/// ```
/// # use std::time::Duration;
/// # use yfinance_ticker::YfClient;
/// let client = YfClient::builder()
///     .timeout(Duration::from_secs(10))
///     .user_agent("my-app/1.0")
///     .build()?;
/// # let _ = client;
/// # Ok::<(), yfinance_ticker::YfError>(())
/// ```
#[derive(Debug, Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    chart_base: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YfClientBuilder {
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Points the client at another chart endpoint, e.g. a mock server.
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.chart_base = Some(url);
        self
    }

    /// Overall per-request timeout. (Default: none)
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Connect timeout. (Default: none)
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// # Errors
    ///
    /// [`YfError::Url`] if the default endpoint fails to parse, [`YfError::Http`]
    /// if the TLS backend cannot be initialised.
    pub fn build(self) -> Result<YfClient, YfError> {
        let chart_base = self
            .chart_base
            .map_or_else(|| Url::parse(DEFAULT_CHART_URL), Ok)?;

        let mut http = Client::builder()
            .user_agent(self.user_agent.unwrap_or_else(|| BROWSER_USER_AGENT.to_owned()))
            .cookie_store(true);
        if let Some(t) = self.timeout {
            http = http.timeout(t);
        }
        if let Some(t) = self.connect_timeout {
            http = http.connect_timeout(t);
        }

        Ok(YfClient {
            http: http.build()?,
            chart_base,
        })
    }
}
