use crate::core::models::Action;
use crate::history::wire::{DividendEvent, Events, SplitEvent};

/// Corporate actions in time order, plus `(ts, ratio)` pairs driving split
/// adjustment of earlier bars.
pub(crate) fn extract_actions(events: Option<&Events>) -> (Vec<Action>, Vec<(i64, f64)>) {
    let Some(ev) = events else {
        return (Vec::new(), Vec::new());
    };

    let mut actions: Vec<Action> = ev.dividends.iter().filter_map(dividend).collect();
    let mut splits: Vec<(i64, f64)> = Vec::with_capacity(ev.splits.len());
    for (key, raw) in &ev.splits {
        let action = split(key, raw);
        if let Action::Split {
            ts,
            numerator,
            denominator,
        } = action
        {
            splits.push((ts, ratio(numerator, denominator)));
        }
        actions.push(action);
    }

    actions.sort_by_key(Action::ts);
    splits.sort_by_key(|&(ts, _)| ts);
    (actions, splits)
}

/// The map key is authoritative; the embedded `date` is a fallback.
fn event_ts(key: &str, date: Option<i64>) -> i64 {
    key.parse().ok().or(date).unwrap_or_default()
}

fn dividend((key, raw): (&String, &DividendEvent)) -> Option<Action> {
    Some(Action::Dividend {
        ts: event_ts(key, raw.date),
        amount: raw.amount?,
    })
}

fn split(key: &str, raw: &SplitEvent) -> Action {
    let (numerator, denominator) = match (raw.numerator, raw.denominator) {
        (Some(n), Some(d)) => (n, d),
        _ => raw.split_ratio.as_deref().map_or((1, 1), parse_ratio),
    };
    Action::Split {
        ts: event_ts(key, raw.date),
        numerator,
        denominator,
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        1.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

/// Yahoo writes ratios as `4:1` or `4/1`; unreadable legs count as 1.
fn parse_ratio(r: &str) -> (u32, u32) {
    let leg = |x: Option<&str>| x.and_then(|v| v.trim().parse().ok()).unwrap_or(1);
    let mut it = r.split(['/', ':']);
    let n = leg(it.next());
    (n, leg(it.next()))
}
