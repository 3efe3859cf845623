use core_types::Trade;

/// Narrows the journal to the trades analytics considers: flagged closed and
/// carrying a close timestamp. Input order is preserved.
pub fn closed_trades(trades: &[Trade]) -> Vec<&Trade> {
    trades
        .iter()
        .filter(|trade| {
            if !trade.is_open && trade.closed_at.is_none() {
                tracing::warn!(
                    trade_id = %trade.id,
                    "Trade is marked closed but has no close time. Excluding it from analytics."
                );
            }
            trade.is_closed()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_trade, open_trade};
    use rust_decimal_macros::dec;

    #[test]
    fn keeps_only_closed_trades_in_order() {
        let mut unstamped = closed_trade("c", dec!(5), "2026-02-19T10:00:00Z", "2026-02-19T11:00:00Z");
        unstamped.closed_at = None;

        let trades = vec![
            closed_trade("a", dec!(10), "2026-02-19T10:00:00Z", "2026-02-19T11:00:00Z"),
            open_trade("b", "2026-02-19T12:00:00Z"),
            unstamped,
            closed_trade("d", dec!(-3), "2026-02-18T10:00:00Z", "2026-02-18T11:00:00Z"),
        ];

        let closed = closed_trades(&trades);
        let ids: Vec<&str> = closed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert!(closed.iter().all(|t| !t.is_open && t.closed_at.is_some()));
    }

    #[test]
    fn empty_journal_yields_nothing() {
        assert!(closed_trades(&[]).is_empty());
    }
}
