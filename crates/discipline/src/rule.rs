use crate::error::DisciplineError;
use chrono::NaiveDate;
use configuration::RuleSettings;
use core_types::{RuleKind, Trade};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Progress at or above this percentage of a limit counts as "near breach".
const NEAR_BREACH_PCT: u32 = 80;

/// A validated daily guardrail.
///
/// Daily loss limits are stored as negative amounts, every other kind as a
/// positive amount, regardless of how the threshold was entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineRule {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub threshold: Decimal,
}

impl DisciplineRule {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: RuleKind,
        threshold: Decimal,
    ) -> Result<Self, DisciplineError> {
        let id = id.into();
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(DisciplineError::EmptyLabel(id));
        }

        let magnitude = threshold.abs();
        if magnitude.is_zero() {
            return Err(DisciplineError::InvalidThreshold { id, threshold });
        }
        let threshold = match kind {
            RuleKind::DailyLoss => -magnitude,
            RuleKind::DailyProfit | RuleKind::MaxTrades => magnitude,
        };

        Ok(Self { id, label, kind, threshold })
    }

    pub fn from_settings(settings: &RuleSettings) -> Result<Self, DisciplineError> {
        Self::new(
            settings.id.clone(),
            settings.label.clone(),
            settings.kind,
            settings.threshold,
        )
    }

    /// Compares the day's activity against this rule.
    pub fn evaluate(&self, stats: &DayStats) -> RuleStatus {
        let (current_value, is_breached) = match self.kind {
            RuleKind::DailyLoss => {
                let current = stats.pnl.min(Decimal::ZERO);
                (current, current <= self.threshold)
            }
            RuleKind::DailyProfit => {
                let current = stats.pnl.max(Decimal::ZERO);
                (current, current >= self.threshold)
            }
            RuleKind::MaxTrades => {
                let current = Decimal::from(stats.trade_count);
                (current, current >= self.threshold)
            }
        };

        let limit = self.threshold.abs();
        let progress_pct = if limit > Decimal::ZERO {
            (current_value.abs() / limit * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        RuleStatus {
            rule: self.clone(),
            current_value,
            is_breached,
            progress_pct,
            is_near_breach: progress_pct >= Decimal::from(NEAR_BREACH_PCT),
        }
    }
}

/// A rule together with where the day currently stands against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleStatus {
    pub rule: DisciplineRule,
    pub current_value: Decimal,
    pub is_breached: bool,
    pub progress_pct: Decimal,
    pub is_near_breach: bool,
}

/// Realized P&L and trade count for one UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub pnl: Decimal,
    pub trade_count: usize,
}

impl DayStats {
    /// Counts every trade no longer open whose close (or, failing that,
    /// open) time falls on `date`.
    pub fn for_date(trades: &[Trade], date: NaiveDate) -> Self {
        let mut stats = Self {
            date,
            pnl: Decimal::ZERO,
            trade_count: 0,
        };
        for trade in trades.iter().filter(|t| !t.is_open && t.effective_date() == date) {
            stats.pnl += trade.pnl;
            stats.trade_count += 1;
        }
        stats
    }
}
