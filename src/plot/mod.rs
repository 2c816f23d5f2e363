//! Line charts of a single price column over time.
//!
//! [`plot`] only builds an in-memory [`Chart`]; drawing happens when the caller
//! asks for it via [`Chart::render_svg`].

use chrono::{DateTime, TimeDelta, Utc};
use plotters::prelude::*;

use crate::core::YfError;
use crate::table::PriceTable;

/// Default canvas size in pixels (10x6 inches at 100 dpi).
pub const DEFAULT_SIZE: (u32, u32) = (1000, 600);

/// Label of the time axis.
pub const X_LABEL: &str = "Date";

/// A line chart of one column of a price table, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: String,
    x_label: String,
    y_label: String,
    legend: String,
    points: Vec<(DateTime<Utc>, f64)>,
    size: (u32, u32),
}

impl Chart {
    /// `Historical data for {ticker} - {column}`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Legend entry of the plotted series.
    #[must_use]
    pub fn legend(&self) -> &str {
        &self.legend
    }

    /// `(timestamp, value)` pairs in table order.
    #[must_use]
    pub fn points(&self) -> &[(DateTime<Utc>, f64)] {
        &self.points
    }

    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Changes the canvas size used by [`Chart::render_svg`].
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Draws the chart as an SVG document.
    ///
    /// `NaN` values are left out of the line.
    ///
    /// # Errors
    ///
    /// [`YfError::EmptyTable`] if the chart has no points, [`YfError::Plot`]
    /// if the backend fails.
    pub fn render_svg(&self) -> Result<String, YfError> {
        let (x0, x1) = self.x_range()?;
        let (y0, y1) = self.y_range();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(plot_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 24).into_font())
                .margin(12)
                .x_label_area_size(40)
                .y_label_area_size(64)
                .build_cartesian_2d(x0..x1, y0..y1)
                .map_err(plot_err)?;

            chart
                .configure_mesh()
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .x_label_formatter(&|d: &DateTime<Utc>| d.format("%Y-%m-%d").to_string())
                .draw()
                .map_err(plot_err)?;

            let finite = self.points.iter().copied().filter(|(_, v)| v.is_finite());
            chart
                .draw_series(LineSeries::new(finite, &BLUE))
                .map_err(plot_err)?
                .label(self.legend.as_str())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(plot_err)?;

            root.present().map_err(plot_err)?;
        }
        Ok(svg)
    }

    fn x_range(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), YfError> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Err(YfError::EmptyTable);
        };
        let (start, mut end) = (first.0, last.0);
        if end <= start {
            end = start + TimeDelta::days(1);
        }
        Ok((start, end))
    }

    fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .points
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if !lo.is_finite() {
            return (0.0, 1.0);
        }
        let pad = if hi > lo {
            (hi - lo) * 0.05
        } else {
            lo.abs().max(1.0) * 0.05
        };
        (lo - pad, hi + pad)
    }
}

fn plot_err(e: impl std::fmt::Display) -> YfError {
    YfError::Plot(e.to_string())
}

/// Builds a line chart of `column` against the table's `Date` index.
///
/// The y axis is labelled with the column name, the x axis with `Date`, and the
/// title reads `Historical data for {ticker} - {column}`. Nothing is drawn or
/// written until the caller renders the returned [`Chart`].
///
/// # Errors
///
/// - [`YfError::InvalidInput`] if `df` is not a price table or `column` is not numeric.
/// - [`YfError::ColumnNotFound`] if `column` is not one of its data columns.
/// - [`YfError::EmptyTable`] if the table has no rows.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(df), err))]
pub fn plot(
    df: &polars::prelude::DataFrame,
    ticker: &str,
    column: &str,
) -> Result<Chart, YfError> {
    let table = PriceTable::new(df)?;
    let values = table.values(column)?;
    if table.height() == 0 {
        return Err(YfError::EmptyTable);
    }
    let stamps = table.index_millis()?;
    if stamps.len() != values.len() {
        return Err(YfError::InvalidInput(format!(
            "'{}' index has null entries",
            crate::core::dataframe::INDEX_COLUMN
        )));
    }

    let points = stamps
        .into_iter()
        .zip(values)
        .map(|(ms, v)| {
            DateTime::from_timestamp_millis(ms)
                .map(|t| (t, v))
                .ok_or_else(|| YfError::InvalidInput(format!("timestamp {ms} out of range")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Chart {
        title: format!("Historical data for {ticker} - {column}"),
        x_label: X_LABEL.to_owned(),
        y_label: column.to_owned(),
        legend: column.to_owned(),
        points,
        size: DEFAULT_SIZE,
    })
}
