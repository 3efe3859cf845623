use crate::rounding::{mean, percentage, round_cents};
use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gross profit over gross loss.
///
/// A journal with winners and no losers has no finite profit factor; that case
/// is its own variant instead of a floating-point infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProfitFactor {
    Finite(Decimal),
    Unbounded,
}

impl ProfitFactor {
    pub fn from_gross(gross_profit: Decimal, gross_loss: Decimal) -> Self {
        if gross_loss > Decimal::ZERO {
            ProfitFactor::Finite(gross_profit / gross_loss)
        } else if gross_profit > Decimal::ZERO {
            ProfitFactor::Unbounded
        } else {
            ProfitFactor::Finite(Decimal::ZERO)
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, ProfitFactor::Unbounded)
    }

    /// The finite value, if there is one.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            ProfitFactor::Finite(value) => Some(*value),
            ProfitFactor::Unbounded => None,
        }
    }
}

impl Default for ProfitFactor {
    fn default() -> Self {
        ProfitFactor::Finite(Decimal::ZERO)
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Finite(value) => write!(f, "{:.2}", round_cents(*value)),
            ProfitFactor::Unbounded => write!(f, "∞"),
        }
    }
}

/// Portfolio-level statistics over the closed trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    // I. Profitability
    pub total_pnl: Decimal,
    pub total_fees: Decimal,
    pub gross_profit: Decimal,
    pub gross_loss: Decimal, // Absolute value
    pub profit_factor: ProfitFactor,
    pub expectancy: Decimal,

    // II. Trade counts
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub breakeven: usize,
    pub win_rate: Decimal,

    // III. Per-trade averages and extremes
    pub avg_win: Decimal,
    pub avg_loss: Decimal,
    pub avg_risk_reward: Decimal,
    pub best_trade: Option<Trade>,
    pub worst_trade: Option<Trade>,
    pub largest_win: Decimal,
    pub largest_loss: Decimal,
}

impl Summary {
    /// The zeroed "no data yet" summary.
    pub fn new() -> Self {
        Self {
            total_pnl: Decimal::ZERO,
            total_fees: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            profit_factor: ProfitFactor::default(),
            expectancy: Decimal::ZERO,
            total_trades: 0,
            wins: 0,
            losses: 0,
            breakeven: 0,
            win_rate: Decimal::ZERO,
            avg_win: Decimal::ZERO,
            avg_loss: Decimal::ZERO,
            avg_risk_reward: Decimal::ZERO,
            best_trade: None,
            worst_trade: None,
            largest_win: Decimal::ZERO,
            largest_loss: Decimal::ZERO,
        }
    }

    /// True for the "no data yet" state, as opposed to a real zero result.
    pub fn is_empty(&self) -> bool {
        self.total_trades == 0
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduces the closed trades to a `Summary` in a single pass.
pub fn summarize(trades: &[&Trade]) -> Summary {
    let mut summary = Summary::new();
    if trades.is_empty() {
        return summary;
    }

    let mut losses_sum = Decimal::ZERO;
    let mut risk_reward_sum = Decimal::ZERO;
    let mut risk_reward_count = 0usize;
    let mut best: Option<&Trade> = None;
    let mut worst: Option<&Trade> = None;

    for &trade in trades {
        summary.total_pnl += trade.pnl;
        summary.total_fees += trade.fees;

        if trade.is_win() {
            summary.wins += 1;
            summary.gross_profit += trade.pnl;
        } else if trade.is_loss() {
            summary.losses += 1;
            losses_sum += trade.pnl;
        } else {
            summary.breakeven += 1;
        }

        // Trades without a recorded R:R stay out of the average.
        if let Some(ratio) = trade.risk_reward_ratio {
            risk_reward_sum += ratio;
            risk_reward_count += 1;
        }

        // Strict comparisons keep the first trade on ties.
        if best.is_none_or(|b| trade.pnl > b.pnl) {
            best = Some(trade);
        }
        if worst.is_none_or(|w| trade.pnl < w.pnl) {
            worst = Some(trade);
        }
    }

    summary.total_trades = trades.len();
    summary.gross_loss = losses_sum.abs();
    summary.profit_factor = ProfitFactor::from_gross(summary.gross_profit, summary.gross_loss);
    summary.win_rate = percentage(summary.wins, summary.total_trades);
    summary.expectancy = mean(summary.total_pnl, summary.total_trades);
    summary.avg_win = mean(summary.gross_profit, summary.wins);
    summary.avg_loss = mean(summary.gross_loss, summary.losses);
    summary.avg_risk_reward = mean(risk_reward_sum, risk_reward_count);
    summary.largest_win = best.map_or(Decimal::ZERO, |t| t.pnl);
    summary.largest_loss = worst.map_or(Decimal::ZERO, |t| t.pnl);
    summary.best_trade = best.cloned();
    summary.worst_trade = worst.cloned();

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::closed_trade;
    use rust_decimal_macros::dec;

    fn journal() -> Vec<Trade> {
        vec![
            Trade {
                fees: dec!(12.4),
                risk_reward_ratio: Some(dec!(2.85)),
                ..closed_trade("btc", dec!(565), "2026-02-20T08:15:00Z", "2026-02-20T09:42:00Z")
            },
            Trade {
                fees: dec!(4),
                risk_reward_ratio: Some(dec!(1.15)),
                ..closed_trade("eur", dec!(470), "2026-02-19T07:00:00Z", "2026-02-19T15:30:00Z")
            },
            Trade {
                fees: dec!(3.6),
                ..closed_trade("eth", dec!(-140), "2026-02-19T13:05:00Z", "2026-02-19T14:00:00Z")
            },
        ]
    }

    #[test]
    fn summarizes_a_mixed_journal() {
        let trades = journal();
        let refs: Vec<&Trade> = trades.iter().collect();
        let summary = summarize(&refs);

        assert_eq!(summary.total_pnl, dec!(895));
        assert_eq!(summary.total_fees, dec!(20.0));
        assert_eq!(summary.wins, 2);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.breakeven, 0);
        assert_eq!(summary.win_rate.round_dp(1), dec!(66.7));
        assert_eq!(summary.gross_profit, dec!(1035));
        assert_eq!(summary.gross_loss, dec!(140));
        assert_eq!(
            summary.profit_factor,
            ProfitFactor::Finite(dec!(1035) / dec!(140))
        );
        assert_eq!(summary.avg_win, dec!(517.5));
        assert_eq!(summary.avg_loss, dec!(140));
        // The trade without an R:R does not drag the average down.
        assert_eq!(summary.avg_risk_reward, dec!(2.00));
        assert_eq!(summary.expectancy.round_dp(2), dec!(298.33));
        assert_eq!(summary.best_trade.as_ref().map(|t| t.id.as_str()), Some("btc"));
        assert_eq!(summary.worst_trade.as_ref().map(|t| t.id.as_str()), Some("eth"));
        assert_eq!(summary.largest_win, dec!(565));
        assert_eq!(summary.largest_loss, dec!(-140));
    }

    #[test]
    fn empty_input_is_the_zeroed_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary, Summary::new());
        assert!(summary.is_empty());
        assert_eq!(summary.profit_factor, ProfitFactor::Finite(Decimal::ZERO));
        assert!(summary.best_trade.is_none());
        assert!(summary.worst_trade.is_none());
    }

    #[test]
    fn profit_factor_is_unbounded_without_losses() {
        let trade = closed_trade("only", dec!(100), "2026-02-20T08:00:00Z", "2026-02-20T09:00:00Z");
        let summary = summarize(&[&trade]);
        assert!(summary.profit_factor.is_unbounded());
        assert_eq!(summary.profit_factor.value(), None);
        assert_eq!(summary.profit_factor.to_string(), "∞");
    }

    #[test]
    fn breakeven_only_journal_has_zero_profit_factor() {
        let a = closed_trade("a", dec!(0), "2026-02-20T08:00:00Z", "2026-02-20T09:00:00Z");
        let b = closed_trade("b", dec!(0), "2026-02-20T10:00:00Z", "2026-02-20T11:00:00Z");
        let summary = summarize(&[&a, &b]);
        assert_eq!(summary.breakeven, 2);
        assert_eq!(summary.profit_factor, ProfitFactor::Finite(Decimal::ZERO));
        assert_eq!(summary.win_rate, Decimal::ZERO);
    }

    #[test]
    fn ties_resolve_to_the_first_trade() {
        let a = closed_trade("a", dec!(50), "2026-02-20T08:00:00Z", "2026-02-20T09:00:00Z");
        let b = closed_trade("b", dec!(50), "2026-02-20T10:00:00Z", "2026-02-20T11:00:00Z");
        let summary = summarize(&[&a, &b]);
        assert_eq!(summary.best_trade.map(|t| t.id), Some("a".to_string()));
        assert_eq!(summary.worst_trade.map(|t| t.id), Some("a".to_string()));
    }

    #[test]
    fn outcome_counts_always_add_up() {
        let trades = vec![
            closed_trade("a", dec!(10), "2026-02-20T08:00:00Z", "2026-02-20T09:00:00Z"),
            closed_trade("b", dec!(0), "2026-02-20T08:00:00Z", "2026-02-20T09:00:00Z"),
            closed_trade("c", dec!(-1), "2026-02-20T08:00:00Z", "2026-02-20T09:00:00Z"),
            closed_trade("d", dec!(-7.25), "2026-02-20T08:00:00Z", "2026-02-20T09:00:00Z"),
        ];
        let refs: Vec<&Trade> = trades.iter().collect();
        let summary = summarize(&refs);
        assert_eq!(summary.wins + summary.losses + summary.breakeven, summary.total_trades);
    }

    #[test]
    fn profit_factor_displays_rounded_to_two_places() {
        assert_eq!(ProfitFactor::from_gross(dec!(2), dec!(3)).to_string(), "0.67");
        assert_eq!(ProfitFactor::from_gross(dec!(1035), dec!(140)).to_string(), "7.39");
        assert_eq!(ProfitFactor::from_gross(dec!(3), dec!(2)).to_string(), "1.50");
        assert_eq!(ProfitFactor::Unbounded.to_string(), "∞");
    }

    #[test]
    fn profit_factor_serializes_as_a_tagged_value() {
        let unbounded = serde_json::to_value(ProfitFactor::Unbounded).unwrap();
        assert_eq!(unbounded, serde_json::json!({ "kind": "unbounded" }));

        let finite = serde_json::to_value(ProfitFactor::Finite(dec!(1.5))).unwrap();
        assert_eq!(finite["kind"], "finite");
    }
}
