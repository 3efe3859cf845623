use crate::alert::{DisciplineAlert, daily_alert};
use crate::error::DisciplineError;
use crate::rule::{DayStats, DisciplineRule, RuleStatus};
use chrono::NaiveDate;
use configuration::Discipline;
use core_types::{RuleKind, Trade};
use rust_decimal::Decimal;

/// The trader's active rules plus the threshold for the "step away" alert.
#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: Vec<DisciplineRule>,
    alert_loss_threshold: Decimal,
}

impl RuleBook {
    /// Builds a rule book from the `[discipline]` configuration, validating
    /// every rule on the way in.
    pub fn new(settings: &Discipline) -> Result<Self, DisciplineError> {
        let rules = settings
            .rules
            .iter()
            .map(DisciplineRule::from_settings)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rules = rules.len(), "Loaded discipline rules.");
        Ok(Self {
            rules,
            alert_loss_threshold: settings.alert_loss_threshold,
        })
    }

    pub fn rules(&self) -> &[DisciplineRule] {
        &self.rules
    }

    /// Evaluates every rule against the trades realized on `date`.
    pub fn evaluate(&self, trades: &[Trade], date: NaiveDate) -> Vec<RuleStatus> {
        let stats = DayStats::for_date(trades, date);
        self.rules
            .iter()
            .map(|rule| {
                let status = rule.evaluate(&stats);
                if status.is_breached {
                    tracing::warn!(
                        rule = %rule.label,
                        current = %status.current_value,
                        threshold = %rule.threshold,
                        "Discipline rule breached."
                    );
                } else if status.is_near_breach {
                    tracing::info!(
                        rule = %rule.label,
                        progress_pct = %status.progress_pct.round_dp(0),
                        "Discipline rule close to its limit."
                    );
                }
                status
            })
            .collect()
    }

    /// The dashboard alert for a day's realized P&L, if any.
    ///
    /// Pass the closed-trade figure from the analytics daily buckets
    /// (`PeriodPnl::today`) so the alert always agrees with the dashboard.
    pub fn alert(&self, today_pnl: Decimal) -> Option<DisciplineAlert> {
        daily_alert(today_pnl, self.alert_loss_threshold)
    }
}

/// Lists the rules a new trade would violate given today's statuses.
///
/// `potential_pnl` is the trade's projected outcome; only a projected loss can
/// trip the daily loss limit.
pub fn check_new_trade(statuses: &[RuleStatus], potential_pnl: Option<Decimal>) -> Vec<String> {
    let mut violations = Vec::new();

    for status in statuses {
        match status.rule.kind {
            RuleKind::MaxTrades if status.is_breached => {
                violations.push(format!(
                    "Max trades reached ({}/day)",
                    status.rule.threshold.normalize()
                ));
            }
            RuleKind::DailyLoss => {
                if let Some(potential) = potential_pnl.filter(|p| *p < Decimal::ZERO) {
                    if status.current_value + potential <= status.rule.threshold {
                        violations.push(format!(
                            "Daily loss limit hit (${})",
                            status.rule.threshold.abs().normalize()
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    violations
}
