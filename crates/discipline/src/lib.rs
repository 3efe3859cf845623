//! Daily trading guardrails: loss limits, profit targets and trade caps,
//! evaluated against the trades realized on a given day.

pub mod alert;
pub mod book;
pub mod error;
pub mod rule;

pub use alert::{AlertLevel, DisciplineAlert, daily_alert, format_pnl};
pub use book::{RuleBook, check_new_trade};
pub use error::DisciplineError;
pub use rule::{DayStats, DisciplineRule, RuleStatus};
