use crate::rounding::{mean, percentage, round_cents, round_whole};
use core_types::{Category, Trade};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running totals for one group of trades.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct GroupStats {
    pub pnl: Decimal,
    pub count: usize,
    pub wins: usize,
}

impl GroupStats {
    pub fn add(&mut self, trade: &Trade) {
        self.pnl += trade.pnl;
        self.count += 1;
        if trade.is_win() {
            self.wins += 1;
        }
    }

    /// Win rate as a whole percentage, zero for an empty group.
    pub fn win_rate(&self) -> Decimal {
        round_whole(percentage(self.wins, self.count))
    }
}

/// Builds one `GroupStats` per key observed.
///
/// A trade contributes its full P&L to every distinct key its extractor
/// yields, so tag groups overlap. Keys repeated on the same trade count once.
pub(crate) fn group_by<K, I, F>(trades: &[&Trade], keys_of: F) -> BTreeMap<K, GroupStats>
where
    K: Category,
    I: IntoIterator<Item = K>,
    F: Fn(&Trade) -> I,
{
    let mut groups: BTreeMap<K, GroupStats> = BTreeMap::new();
    let mut seen: Vec<K> = Vec::new();

    for &trade in trades {
        seen.clear();
        for key in keys_of(trade) {
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            groups.entry(key).or_default().add(trade);
        }
    }

    groups
}

/// P&L, trade count and win rate for one market or strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBreakdown {
    pub key: String,
    pub label: String,
    pub pnl: Decimal,
    pub trade_count: usize,
    pub win_rate: Decimal,
}

/// How trades tagged with one emotion performed on average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagImpact {
    pub tag: String,
    pub label: String,
    pub avg_pnl: Decimal,
    pub trade_count: usize,
    pub total_pnl: Decimal,
}

/// What one recurring mistake has cost. Costs are summed P&L and are
/// usually negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MistakeCost {
    pub tag: String,
    pub label: String,
    pub count: usize,
    pub total_cost: Decimal,
    pub avg_cost: Decimal,
}

/// Groups into `GroupBreakdown`s, best performer first.
fn ranked_breakdown<K: Category>(groups: BTreeMap<K, GroupStats>) -> Vec<GroupBreakdown> {
    let mut rows: Vec<GroupBreakdown> = groups
        .into_iter()
        .map(|(key, stats)| GroupBreakdown {
            key: key.key().to_string(),
            label: key.label().to_string(),
            pnl: round_cents(stats.pnl),
            trade_count: stats.count,
            win_rate: stats.win_rate(),
        })
        .collect();
    rows.sort_by(|a, b| b.pnl.cmp(&a.pnl));
    rows
}

pub fn market_breakdown(trades: &[&Trade]) -> Vec<GroupBreakdown> {
    ranked_breakdown(group_by(trades, |t| [t.market]))
}

pub fn strategy_breakdown(trades: &[&Trade]) -> Vec<GroupBreakdown> {
    ranked_breakdown(group_by(trades, |t| t.strategy_tags.clone()))
}

/// Emotions ranked by average P&L per trade, since emotions are logged with
/// very different frequencies.
pub fn emotion_impact(trades: &[&Trade]) -> Vec<TagImpact> {
    let mut rows: Vec<TagImpact> = group_by(trades, |t| t.emotion_tags.clone())
        .into_iter()
        .map(|(tag, stats)| TagImpact {
            tag: tag.key().to_string(),
            label: tag.label().to_string(),
            avg_pnl: round_cents(mean(stats.pnl, stats.count)),
            trade_count: stats.count,
            total_pnl: round_cents(stats.pnl),
        })
        .collect();
    rows.sort_by(|a, b| b.avg_pnl.cmp(&a.avg_pnl));
    rows
}

/// Mistakes ranked most costly first (ascending total cost).
pub fn mistake_costs(trades: &[&Trade]) -> Vec<MistakeCost> {
    let mut rows: Vec<MistakeCost> = group_by(trades, |t| t.mistake_tags.clone())
        .into_iter()
        .map(|(tag, stats)| MistakeCost {
            tag: tag.key().to_string(),
            label: tag.label().to_string(),
            count: stats.count,
            total_cost: round_cents(stats.pnl),
            avg_cost: round_cents(mean(stats.pnl, stats.count)),
        })
        .collect();
    rows.sort_by(|a, b| a.total_cost.cmp(&b.total_cost));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::closed_trade;
    use core_types::{EmotionTag, MarketType, MistakeTag, StrategyTag};
    use rust_decimal_macros::dec;

    fn tagged(id: &str, pnl: Decimal, strategies: Vec<StrategyTag>) -> Trade {
        Trade {
            strategy_tags: strategies,
            ..closed_trade(id, pnl, "2026-02-19T10:00:00Z", "2026-02-19T11:00:00Z")
        }
    }

    #[test]
    fn markets_are_a_partition_sorted_by_pnl() {
        let trades = vec![
            Trade { market: MarketType::Forex, ..tagged("a", dec!(470), vec![]) },
            Trade { market: MarketType::Crypto, ..tagged("b", dec!(565), vec![]) },
            Trade { market: MarketType::Crypto, ..tagged("c", dec!(-140), vec![]) },
            Trade { market: MarketType::Stocks, ..tagged("d", dec!(-20), vec![]) },
        ];
        let refs: Vec<&Trade> = trades.iter().collect();
        let rows = market_breakdown(&refs);

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Forex", "Crypto", "Stocks"]);
        assert_eq!(rows[1].pnl, dec!(425));
        assert_eq!(rows[1].trade_count, 2);
        assert_eq!(rows[1].win_rate, dec!(50));
        assert_eq!(rows.iter().map(|r| r.trade_count).sum::<usize>(), trades.len());
    }

    #[test]
    fn a_trade_counts_in_full_for_every_strategy_tag() {
        let trade = tagged("a", dec!(300), vec![StrategyTag::Breakout, StrategyTag::Swing]);
        let rows = strategy_breakdown(&[&trade]);

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.pnl, dec!(300));
            assert_eq!(row.trade_count, 1);
            assert_eq!(row.win_rate, dec!(100));
        }
    }

    #[test]
    fn duplicate_tags_on_one_trade_count_once() {
        let trade = tagged("a", dec!(10), vec![StrategyTag::News, StrategyTag::News]);
        let rows = strategy_breakdown(&[&trade]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].trade_count, 1);
        assert_eq!(rows[0].pnl, dec!(10));
    }

    #[test]
    fn untagged_trades_create_no_groups() {
        let trade = tagged("a", dec!(10), vec![]);
        assert!(strategy_breakdown(&[&trade]).is_empty());
        assert!(emotion_impact(&[&trade]).is_empty());
        assert!(mistake_costs(&[&trade]).is_empty());
    }

    #[test]
    fn win_rate_rounds_to_whole_percent() {
        let trades = vec![
            tagged("a", dec!(10), vec![StrategyTag::Scalping]),
            tagged("b", dec!(10), vec![StrategyTag::Scalping]),
            tagged("c", dec!(-5), vec![StrategyTag::Scalping]),
        ];
        let refs: Vec<&Trade> = trades.iter().collect();
        assert_eq!(strategy_breakdown(&refs)[0].win_rate, dec!(67));
    }

    #[test]
    fn emotions_rank_by_average_not_total() {
        let trades = vec![
            // Calm: many small winners, larger total.
            Trade { emotion_tags: vec![EmotionTag::Calm], ..tagged("a", dec!(100), vec![]) },
            Trade { emotion_tags: vec![EmotionTag::Calm], ..tagged("b", dec!(100), vec![]) },
            Trade { emotion_tags: vec![EmotionTag::Calm], ..tagged("c", dec!(100), vec![]) },
            // Confident: one big winner, higher average.
            Trade { emotion_tags: vec![EmotionTag::Confident], ..tagged("d", dec!(250), vec![]) },
            Trade { emotion_tags: vec![EmotionTag::Fomo], ..tagged("e", dec!(-90), vec![]) },
        ];
        let refs: Vec<&Trade> = trades.iter().collect();
        let rows = emotion_impact(&refs);

        let tags: Vec<&str> = rows.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["confident", "calm", "fomo"]);
        assert_eq!(rows[1].total_pnl, dec!(300));
        assert_eq!(rows[1].avg_pnl, dec!(100));
        assert_eq!(rows[2].label, "FOMO");
    }

    #[test]
    fn mistakes_rank_most_costly_first() {
        let trades = vec![
            Trade {
                mistake_tags: vec![MistakeTag::EarlyExit],
                ..tagged("a", dec!(-40), vec![])
            },
            Trade {
                mistake_tags: vec![MistakeTag::NoStopLoss, MistakeTag::Chased],
                ..tagged("b", dec!(-310), vec![])
            },
            Trade {
                mistake_tags: vec![MistakeTag::NoStopLoss],
                ..tagged("c", dec!(-90), vec![])
            },
        ];
        let refs: Vec<&Trade> = trades.iter().collect();
        let rows = mistake_costs(&refs);

        let tags: Vec<&str> = rows.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["no-stop-loss", "chased", "early-exit"]);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].total_cost, dec!(-400));
        assert_eq!(rows[0].avg_cost, dec!(-200));
        assert_eq!(rows[0].label, "No SL");
    }
}
