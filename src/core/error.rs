use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YfError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// Yahoo answered with an error object instead of a result (e.g. an unknown symbol).
    #[error("yahoo error: {code} - {description}")]
    Api {
        /// Yahoo's error code, such as `Not Found`.
        code: String,
        /// Human readable description supplied by Yahoo.
        description: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An invalid date range was provided for a historical data request (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,

    /// A request parameter could not be understood, such as an unknown interval code.
    #[error("Invalid parameter: {0}")]
    InvalidParams(String),

    /// The request succeeded but no rows were returned for the symbol and range.
    #[error("No data returned for ticker {symbol}")]
    NoData {
        /// The requested symbol.
        symbol: String,
    },

    /// A frame handed to an accessor or the plotter is not a price table.
    #[error("Input must be a price table: {0}")]
    InvalidInput(String),

    /// The requested column does not exist in the price table.
    #[error("Column '{column}' not found in the DataFrame")]
    ColumnNotFound {
        /// The missing column name.
        column: String,
    },

    /// The price table has no rows, so there is no last value to read or series to draw.
    #[error("price table is empty")]
    EmptyTable,

    /// A Polars operation failed while building or reading a table.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Rendering a chart failed.
    #[error("Plot error: {0}")]
    Plot(String),
}

impl YfError {
    /// Returns `true` for failures of the provider call itself (transport, status,
    /// Yahoo error payloads, malformed responses).
    ///
    /// `NoData` is deliberately excluded: the call succeeded but returned nothing.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Url(_) | Self::Status { .. } | Self::Api { .. } | Self::Data(_)
        )
    }
}
