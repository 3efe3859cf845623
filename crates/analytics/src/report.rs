use crate::breakdown::{GroupBreakdown, MistakeCost, TagImpact};
use crate::daily::{CumulativePoint, DailyPnl};
use crate::summary::Summary;
use crate::time_slots::TimeSlot;
use serde::{Deserialize, Serialize};

/// Every statistic derived from one snapshot of the journal.
///
/// This struct is the final output of the `AnalyticsEngine` and is what chart
/// and table consumers read from. It is rebuilt from scratch whenever the
/// trade list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Number of trades that passed the closed-trade filter.
    pub closed_trades: usize,

    // I. Portfolio summary
    pub summary: Summary,

    // II. Time series
    pub daily_pnl: Vec<DailyPnl>,
    pub cumulative_pnl: Vec<CumulativePoint>,

    // III. Categorical breakdowns
    pub market_breakdown: Vec<GroupBreakdown>,
    pub strategy_breakdown: Vec<GroupBreakdown>,
    pub emotion_impact: Vec<TagImpact>,
    pub mistake_costs: Vec<MistakeCost>,

    // IV. Timing
    pub hourly_analysis: Vec<TimeSlot>,
    pub day_of_week_analysis: Vec<TimeSlot>,
}
