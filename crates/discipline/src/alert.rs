use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Warning,
    Danger,
}

/// A nudge shown at the top of the dashboard based on today's P&L.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineAlert {
    pub level: AlertLevel,
    pub message: String,
}

/// Builds today's alert, if any.
///
/// A green day gets a reminder to stay focused; a day below
/// `loss_threshold` gets a suggestion to stop trading.
pub fn daily_alert(today_pnl: Decimal, loss_threshold: Decimal) -> Option<DisciplineAlert> {
    if today_pnl > Decimal::ZERO {
        return Some(DisciplineAlert {
            level: AlertLevel::Warning,
            message: format!(
                "You've made {} today. Stay focused and manage your risk.",
                format_pnl(today_pnl)
            ),
        });
    }
    if today_pnl < loss_threshold {
        return Some(DisciplineAlert {
            level: AlertLevel::Danger,
            message: format!(
                "You're down {} today. Consider stepping away.",
                format_pnl(today_pnl)
            ),
        });
    }
    None
}

/// Formats a P&L amount as signed dollars, e.g. `+$1,234.50` or `-$80.00`.
pub fn format_pnl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "+" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, cents)
}
