use crate::daily::{CumulativePoint, DailyPnl};
use crate::rounding::round_cents;
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Realized P&L for today, the current week (from Monday) and the current month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodPnl {
    pub today: Decimal,
    pub week: Decimal,
    pub month: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakKind {
    Win,
    Loss,
}

/// The run of consecutive winning (P&L >= 0) or losing days ending on the
/// most recent trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub kind: StreakKind,
    pub count: usize,
}

/// Cumulative P&L on top of the account balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub equity: Decimal,
    pub drawdown: Decimal,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub period_pnl: PeriodPnl,
    pub best_day: Option<DailyPnl>,
    pub worst_day: Option<DailyPnl>,
    pub current_streak: Streak,
    pub equity_curve: Vec<EquityPoint>,
}

impl DashboardStats {
    pub fn compute(
        daily: &[DailyPnl],
        cumulative: &[CumulativePoint],
        today: NaiveDate,
        account_balance: Decimal,
    ) -> Self {
        Self {
            period_pnl: period_pnl(daily, today),
            best_day: best_day(daily),
            worst_day: worst_day(daily),
            current_streak: current_streak(daily),
            equity_curve: equity_curve(cumulative, account_balance),
        }
    }
}

/// Sums the daily buckets into today / this week / this month.
///
/// Weeks start on Monday. `today` is passed in so the result does not depend
/// on the wall clock.
pub fn period_pnl(daily: &[DailyPnl], today: NaiveDate) -> PeriodPnl {
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let month_start = today - Duration::days(i64::from(today.day0()));

    let mut period = PeriodPnl::default();
    for day in daily {
        if day.date == today {
            period.today += day.pnl;
        }
        if day.date >= week_start {
            period.week += day.pnl;
        }
        if day.date >= month_start {
            period.month += day.pnl;
        }
    }

    PeriodPnl {
        today: round_cents(period.today),
        week: round_cents(period.week),
        month: round_cents(period.month),
    }
}

/// The most profitable day; the earliest one wins a tie.
pub fn best_day(daily: &[DailyPnl]) -> Option<DailyPnl> {
    daily
        .iter()
        .fold(None::<&DailyPnl>, |best, day| match best {
            Some(b) if day.pnl <= b.pnl => Some(b),
            _ => Some(day),
        })
        .cloned()
}

/// The least profitable day; the earliest one wins a tie.
pub fn worst_day(daily: &[DailyPnl]) -> Option<DailyPnl> {
    daily
        .iter()
        .fold(None::<&DailyPnl>, |worst, day| match worst {
            Some(w) if day.pnl >= w.pnl => Some(w),
            _ => Some(day),
        })
        .cloned()
}

pub fn current_streak(daily: &[DailyPnl]) -> Streak {
    let kind_of = |day: &DailyPnl| {
        if day.pnl >= Decimal::ZERO {
            StreakKind::Win
        } else {
            StreakKind::Loss
        }
    };

    let Some(latest) = daily.last() else {
        return Streak { kind: StreakKind::Win, count: 0 };
    };
    let kind = kind_of(latest);
    let count = daily.iter().rev().take_while(|day| kind_of(day) == kind).count();

    Streak { kind, count }
}

/// Shifts the cumulative P&L series by the account balance.
pub fn equity_curve(cumulative: &[CumulativePoint], account_balance: Decimal) -> Vec<EquityPoint> {
    cumulative
        .iter()
        .map(|point| EquityPoint {
            date: point.date,
            equity: round_cents(account_balance + point.pnl),
            drawdown: point.drawdown,
        })
        .collect()
}
