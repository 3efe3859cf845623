use crate::breakdown::GroupStats;
use crate::rounding::round_cents;
use chrono::{Datelike, Timelike};
use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Performance of the trades entered in one time slot.
///
/// `slot` is the UTC hour (0-23) for hourly analysis, or the weekday
/// (0 = Sunday .. 6 = Saturday) for day-of-week analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub slot: u32,
    pub label: String,
    pub pnl: Decimal,
    pub trade_count: usize,
    pub win_rate: Decimal,
}

impl TimeSlot {
    fn from_stats(slot: u32, label: String, stats: &GroupStats) -> Self {
        Self {
            slot,
            label,
            pnl: round_cents(stats.pnl),
            trade_count: stats.count,
            win_rate: stats.win_rate(),
        }
    }
}

/// Groups trades by the UTC hour they were *opened* in. Only hours that saw
/// at least one entry are returned, in ascending order.
pub fn hourly_analysis(trades: &[&Trade]) -> Vec<TimeSlot> {
    let mut hours: BTreeMap<u32, GroupStats> = BTreeMap::new();
    for &trade in trades {
        hours.entry(trade.opened_at.hour()).or_default().add(trade);
    }

    hours
        .iter()
        .map(|(&hour, stats)| TimeSlot::from_stats(hour, format!("{:02}:00", hour), stats))
        .collect()
}

/// Groups trades by the UTC weekday they were opened on.
///
/// Always returns all seven days, Sunday first, zero-filled where no trade
/// was entered.
pub fn day_of_week_analysis(trades: &[&Trade]) -> Vec<TimeSlot> {
    let mut days = [GroupStats::default(); 7];
    for &trade in trades {
        let weekday = trade.opened_at.weekday().num_days_from_sunday() as usize;
        days[weekday].add(trade);
    }

    days.iter()
        .zip(DAY_NAMES)
        .zip(0u32..)
        .map(|((stats, name), day)| TimeSlot::from_stats(day, name.to_string(), stats))
        .collect()
}
