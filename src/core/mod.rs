//! Core components of the `yfinance-ticker` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`YfClient`] and its builder.
//! - The primary [`YfError`] type.
//! - Shared data models like [`Candle`] and [`HistoryResponse`].
//! - The [`ToDataFrame`] conversion trait.

/// The client (`YfClient`), builder, and configuration.
pub mod client;
/// Conversion of fetched models into Polars frames.
pub mod dataframe;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Shared data models used across the history, table and ticker modules.
pub mod models;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{YfClient, YfClientBuilder};
pub use dataframe::ToDataFrame;
pub use error::YfError;
pub use models::{Action, Candle, HistoryMeta, HistoryResponse, Interval};
