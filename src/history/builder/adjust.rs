/// For each bar, the product of all split ratios that take effect after it.
/// `split_events` must be sorted by timestamp.
pub(crate) fn cumulative_split_after(ts: &[i64], split_events: &[(i64, f64)]) -> Vec<f64> {
    let mut out = vec![1.0; ts.len()];
    if split_events.is_empty() || ts.is_empty() {
        return out;
    }

    let mut sp_idx = split_events.len();
    let mut running: f64 = 1.0;

    for i in (0..ts.len()).rev() {
        while sp_idx > 0 && split_events[sp_idx - 1].0 > ts[i] {
            sp_idx -= 1;
            running *= split_events[sp_idx].1;
        }
        out[i] = running;
    }
    out
}

/// Price multiplier for one bar: `adjclose / close` when both are known,
/// otherwise the inverse of the pending split factor.
pub(crate) fn price_factor(adjclose: Option<f64>, close: Option<f64>, split_after: f64) -> f64 {
    match (adjclose, close) {
        (Some(adj), Some(c)) if c != 0.0 => adj / c,
        _ => 1.0 / split_after.max(1e-12),
    }
}
