use crate::breakdown::{emotion_impact, market_breakdown, mistake_costs, strategy_breakdown};
use crate::daily::{cumulative_pnl, daily_pnl};
use crate::dashboard::DashboardStats;
use crate::filter::closed_trades;
use crate::report::AnalyticsReport;
use crate::summary::summarize;
use crate::time_slots::{day_of_week_analysis, hourly_analysis};
use chrono::NaiveDate;
use core_types::Trade;
use rust_decimal::Decimal;

/// A stateless calculator for deriving journal statistics from a list of trades.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating journal analytics.
    ///
    /// # Arguments
    ///
    /// * `trades` - The full journal, open trades included. Only closed trades
    ///   reach the aggregators.
    ///
    /// # Returns
    ///
    /// The complete `AnalyticsReport`. An empty or fully open journal yields
    /// the zeroed report rather than an error.
    pub fn calculate(&self, trades: &[Trade]) -> AnalyticsReport {
        let closed = closed_trades(trades);
        tracing::debug!(
            total = trades.len(),
            closed = closed.len(),
            "Calculating journal analytics."
        );

        let daily = daily_pnl(&closed);
        let cumulative = cumulative_pnl(&daily);

        AnalyticsReport {
            closed_trades: closed.len(),
            summary: summarize(&closed),
            market_breakdown: market_breakdown(&closed),
            strategy_breakdown: strategy_breakdown(&closed),
            emotion_impact: emotion_impact(&closed),
            mistake_costs: mistake_costs(&closed),
            hourly_analysis: hourly_analysis(&closed),
            day_of_week_analysis: day_of_week_analysis(&closed),
            daily_pnl: daily,
            cumulative_pnl: cumulative,
        }
    }

    /// Derives the dashboard headline numbers from a calculated report.
    ///
    /// # Arguments
    ///
    /// * `report` - The output of `calculate`.
    /// * `today` - The UTC date treated as "today" for period sums.
    /// * `account_balance` - The configured starting balance for the equity curve.
    pub fn dashboard(
        &self,
        report: &AnalyticsReport,
        today: NaiveDate,
        account_balance: Decimal,
    ) -> DashboardStats {
        DashboardStats::compute(&report.daily_pnl, &report.cumulative_pnl, today, account_balance)
    }
}
