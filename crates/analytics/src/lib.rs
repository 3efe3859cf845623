//! # Trade Forge Analytics Engine
//!
//! This crate turns a trading journal into the statistics behind every chart
//! and table: portfolio summary, daily and cumulative P&L with drawdown,
//! market/strategy/emotion/mistake breakdowns, and entry-time analysis.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** No I/O and no clock. It depends only on `core-types`.
//! - **Closed trades only:** Every aggregator reads the output of
//!   [`filter::closed_trades`]; open positions never reach them.
//! - **Total functions:** Empty journals and zero denominators produce
//!   explicit zero values. Nothing in this crate returns an error.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: runs every aggregator over a trade list.
//! - `AnalyticsReport`: the bundle of all derived statistics.
//! - `DashboardStats`: period P&L, best/worst day, streak and equity curve.

pub mod breakdown;
pub mod daily;
pub mod dashboard;
pub mod engine;
pub mod filter;
pub mod report;
pub mod rounding;
pub mod summary;
pub mod time_slots;

#[cfg(test)]
mod test_support;

pub use breakdown::{GroupBreakdown, MistakeCost, TagImpact};
pub use daily::{CumulativePoint, DailyPnl};
pub use dashboard::{DashboardStats, EquityPoint, PeriodPnl, Streak, StreakKind};
pub use engine::AnalyticsEngine;
pub use report::AnalyticsReport;
pub use summary::{ProfitFactor, Summary};
pub use time_slots::TimeSlot;
