//! Accessors over a fetched price table.
//!
//! A price table is a Polars [`DataFrame`] whose first column is the temporal
//! `Date` index, as produced by [`HistoryBuilder::fetch_table`](crate::HistoryBuilder::fetch_table).
//! The index is not reported as a data column.

use polars::prelude::*;

use crate::core::YfError;
use crate::core::dataframe::INDEX_COLUMN;

/// Borrowed view of a frame that has passed the price-table checks.
#[derive(Debug, Clone, Copy)]
pub struct PriceTable<'a> {
    df: &'a DataFrame,
}

impl<'a> PriceTable<'a> {
    /// Validates that `df` looks like a price table.
    ///
    /// # Errors
    ///
    /// [`YfError::InvalidInput`] if the first column is not a `Date` column of
    /// a date or datetime type.
    pub fn new(df: &'a DataFrame) -> Result<Self, YfError> {
        let Some(first) = df.get_columns().first() else {
            return Err(YfError::InvalidInput("frame has no columns".into()));
        };
        if first.name().as_str() != INDEX_COLUMN {
            return Err(YfError::InvalidInput(format!(
                "expected '{INDEX_COLUMN}' index as first column, found '{}'",
                first.name()
            )));
        }
        if !matches!(first.dtype(), DataType::Datetime(_, _) | DataType::Date) {
            return Err(YfError::InvalidInput(format!(
                "'{INDEX_COLUMN}' column has non-temporal type {}",
                first.dtype()
            )));
        }
        Ok(Self { df })
    }

    /// Data column names in table order, without the index.
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .skip(1)
            .map(|name| name.as_str().to_owned())
            .collect()
    }

    /// Number of sessions (rows).
    #[must_use]
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Looks up a data column by name.
    ///
    /// # Errors
    ///
    /// [`YfError::ColumnNotFound`] if `column` is absent or names the index.
    pub fn column(&self, column: &str) -> Result<&'a Series, YfError> {
        if column == INDEX_COLUMN {
            return Err(not_found(column));
        }
        self.df
            .column(column)
            .map(Column::as_materialized_series)
            .map_err(|_| not_found(column))
    }

    /// Looks up a data column that holds numbers.
    ///
    /// # Errors
    ///
    /// [`YfError::ColumnNotFound`] for unknown columns, [`YfError::InvalidInput`]
    /// if the column is not numeric.
    pub fn numeric_column(&self, column: &str) -> Result<&'a Series, YfError> {
        let series = self.column(column)?;
        if !series.dtype().is_primitive_numeric() {
            return Err(YfError::InvalidInput(format!(
                "column '{column}' has non-numeric type {}",
                series.dtype()
            )));
        }
        Ok(series)
    }

    /// Values of `column` as `f64`, nulls mapped to `NaN`.
    ///
    /// # Errors
    ///
    /// See [`PriceTable::numeric_column`].
    pub fn values(&self, column: &str) -> Result<Vec<f64>, YfError> {
        let cast = self.numeric_column(column)?.strict_cast(&DataType::Float64)?;
        Ok(cast
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// Index timestamps in Unix milliseconds.
    ///
    /// # Errors
    ///
    /// Propagates Polars cast failures.
    pub fn index_millis(&self) -> Result<Vec<i64>, YfError> {
        let index = self.df.column(INDEX_COLUMN)?.as_materialized_series();
        let millis = index
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
            .cast(&DataType::Int64)?;
        Ok(millis.i64()?.into_iter().flatten().collect())
    }
}

fn not_found(column: &str) -> YfError {
    YfError::ColumnNotFound {
        column: column.to_owned(),
    }
}

/// Returns the data column names of a price table in their native order.
///
/// # Errors
///
/// [`YfError::InvalidInput`] if `df` is not a price table.
pub fn columns(df: &DataFrame) -> Result<Vec<String>, YfError> {
    Ok(PriceTable::new(df)?.columns())
}

/// Returns the most recent (final-row) value of `column`.
///
/// A null cell reads as `NaN`.
///
/// # Errors
///
/// - [`YfError::InvalidInput`] if `df` is not a price table or `column` is not numeric.
/// - [`YfError::ColumnNotFound`] if `column` is not one of its data columns.
/// - [`YfError::EmptyTable`] if the table has no rows.
pub fn last_value(df: &DataFrame, column: &str) -> Result<f64, YfError> {
    let table = PriceTable::new(df)?;
    let series = table.numeric_column(column)?;
    if series.is_empty() {
        return Err(YfError::EmptyTable);
    }
    let last = series.tail(Some(1)).strict_cast(&DataType::Float64)?;
    Ok(last.f64()?.get(0).unwrap_or(f64::NAN))
}
