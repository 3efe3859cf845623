use crate::rounding::round_cents;
use chrono::NaiveDate;
use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Realized P&L for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPnl {
    pub date: NaiveDate,
    pub pnl: Decimal,
    pub trade_count: usize,
}

/// One point of the cumulative P&L series.
///
/// `drawdown` is the percentage below the running peak; it is never positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub pnl: Decimal,
    pub drawdown: Decimal,
}

/// Buckets trades by the UTC day they were closed on, ascending by date.
pub fn daily_pnl(trades: &[&Trade]) -> Vec<DailyPnl> {
    let mut buckets: BTreeMap<NaiveDate, (Decimal, usize)> = BTreeMap::new();
    for trade in trades {
        let bucket = buckets.entry(trade.effective_date()).or_default();
        bucket.0 += trade.pnl;
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (pnl, trade_count))| DailyPnl {
            date,
            pnl: round_cents(pnl),
            trade_count,
        })
        .collect()
}

/// Walks the daily buckets in order, tracking the running total and its peak.
///
/// The peak starts at zero, so a journal that has only lost money so far
/// reports no drawdown rather than dividing by a non-positive peak.
pub fn cumulative_pnl(daily: &[DailyPnl]) -> Vec<CumulativePoint> {
    let mut running = Decimal::ZERO;
    let mut peak = Decimal::ZERO;

    daily
        .iter()
        .map(|day| {
            running += day.pnl;
            peak = peak.max(running);
            let drawdown = if peak > Decimal::ZERO {
                (running - peak) / peak * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            CumulativePoint {
                date: day.date,
                pnl: round_cents(running),
                drawdown: round_cents(drawdown),
            }
        })
        .collect()
}
