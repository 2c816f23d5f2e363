//! Historical prices from the chart endpoint.

mod builder;
mod range;
pub(crate) mod wire;

pub use builder::HistoryBuilder;
pub use range::{DEFAULT_LOOKBACK_DAYS, DateRange};
