use crate::core::models::Candle;
use crate::history::wire::QuoteBlock;

use super::adjust::price_factor;

/// Turn the column-oriented quote block into candles.
///
/// Returns the candles and, aligned with them, the unadjusted close of each
/// kept bar. Bars with a missing OHLC field are dropped unless `keepna`, in
/// which case the gaps become `NaN` and volume is left unadjusted.
pub(crate) fn assemble_candles(
    ts: &[i64],
    q: &QuoteBlock,
    adj: &[Option<f64>],
    auto_adjust: bool,
    keepna: bool,
    cum_split_after: &[f64],
) -> (Vec<Candle>, Vec<f64>) {
    let mut out = Vec::with_capacity(ts.len());
    let mut raw_close = Vec::with_capacity(ts.len());

    for (i, &t) in ts.iter().enumerate() {
        let mut ohlc = [
            cell(&q.open, i),
            cell(&q.high, i),
            cell(&q.low, i),
            cell(&q.close, i),
        ];
        let volume = cell(&q.volume, i);
        let close_raw = ohlc[3];

        let split_after = cum_split_after.get(i).copied().unwrap_or(1.0);
        let mut volume_out = volume;
        if auto_adjust {
            let pf = price_factor(cell(adj, i), close_raw, split_after);
            for v in ohlc.iter_mut().flatten() {
                *v *= pf;
            }
            volume_out = volume.map(|v| split_adjust_volume(v, split_after));
        }

        let candle = match ohlc {
            [Some(open), Some(high), Some(low), Some(close)] => Candle {
                ts: t,
                open,
                high,
                low,
                close,
                volume: volume_out,
            },
            _ if keepna => Candle {
                ts: t,
                open: ohlc[0].unwrap_or(f64::NAN),
                high: ohlc[1].unwrap_or(f64::NAN),
                low: ohlc[2].unwrap_or(f64::NAN),
                close: ohlc[3].unwrap_or(f64::NAN),
                volume,
            },
            _ => continue,
        };

        out.push(candle);
        raw_close.push(close_raw.unwrap_or(f64::NAN));
    }

    (out, raw_close)
}

fn cell<T: Copy>(v: &[Option<T>], i: usize) -> Option<T> {
    v.get(i).copied().flatten()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn split_adjust_volume(v: u64, split_after: f64) -> u64 {
    let adjusted = (v as f64) * split_after;
    if adjusted.is_finite() {
        adjusted.round() as u64
    } else {
        v
    }
}
