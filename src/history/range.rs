use chrono::{DateTime, TimeDelta, Utc};

use crate::core::YfError;

/// How far back a request reaches when no start date is given.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// A resolved `[start, end)` window for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound, sent as `period1`.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound, sent as `period2`.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Fills in missing bounds relative to `now`: the start defaults to
    /// `now - 365 days`, the end to `now`.
    #[must_use]
    pub fn resolve(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            start: start.unwrap_or_else(|| now - TimeDelta::days(DEFAULT_LOOKBACK_DAYS)),
            end: end.unwrap_or(now),
        }
    }

    /// Unix-second bounds as sent to the chart endpoint (`period1`, `period2`).
    ///
    /// # Errors
    ///
    /// Returns [`YfError::InvalidDates`] unless `start < end`.
    pub fn period(self) -> Result<(i64, i64), YfError> {
        let (p1, p2) = (self.start.timestamp(), self.end.timestamp());
        if p1 >= p2 {
            return Err(YfError::InvalidDates);
        }
        Ok((p1, p2))
    }

    /// Whether a bar timestamp (Unix seconds) lies inside the window.
    #[must_use]
    pub fn contains_ts(self, ts: i64) -> bool {
        ts >= self.start.timestamp() && ts < self.end.timestamp()
    }
}
