use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A categorical attribute of a trade that analytics can group by.
///
/// `key` is the stable machine value (the same string used in serialized
/// trades), `label` is the human-facing name shown next to charts.
pub trait Category: Copy + Ord + fmt::Debug {
    fn key(&self) -> &'static str;
    fn label(&self) -> &'static str;
}

/// Finds the variant whose key matches `s`, used by every `FromStr` below.
fn parse_category<T: Category>(all: &[T], kind: &str, s: &str) -> Result<T, CoreError> {
    all.iter()
        .copied()
        .find(|v| v.key() == s)
        .ok_or_else(|| CoreError::InvalidInput(kind.to_string(), s.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketType {
    Crypto,
    Forex,
    Binary,
    Stocks,
    Futures,
}

impl MarketType {
    pub const ALL: [MarketType; 5] = [
        MarketType::Crypto,
        MarketType::Forex,
        MarketType::Binary,
        MarketType::Stocks,
        MarketType::Futures,
    ];
}

impl Category for MarketType {
    fn key(&self) -> &'static str {
        match self {
            MarketType::Crypto => "crypto",
            MarketType::Forex => "forex",
            MarketType::Binary => "binary",
            MarketType::Stocks => "stocks",
            MarketType::Futures => "futures",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MarketType::Crypto => "Crypto",
            MarketType::Forex => "Forex",
            MarketType::Binary => "Binary",
            MarketType::Stocks => "Stocks",
            MarketType::Futures => "Futures",
        }
    }
}

impl FromStr for MarketType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(&Self::ALL, "market", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TradeDirection {
    Long,
    Short,
    Call,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyTag {
    Scalping,
    Swing,
    DayTrade,
    News,
    Breakout,
    Reversal,
    TrendFollow,
    MeanReversion,
}

impl StrategyTag {
    pub const ALL: [StrategyTag; 8] = [
        StrategyTag::Scalping,
        StrategyTag::Swing,
        StrategyTag::DayTrade,
        StrategyTag::News,
        StrategyTag::Breakout,
        StrategyTag::Reversal,
        StrategyTag::TrendFollow,
        StrategyTag::MeanReversion,
    ];
}

impl Category for StrategyTag {
    fn key(&self) -> &'static str {
        match self {
            StrategyTag::Scalping => "scalping",
            StrategyTag::Swing => "swing",
            StrategyTag::DayTrade => "day-trade",
            StrategyTag::News => "news",
            StrategyTag::Breakout => "breakout",
            StrategyTag::Reversal => "reversal",
            StrategyTag::TrendFollow => "trend-follow",
            StrategyTag::MeanReversion => "mean-reversion",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StrategyTag::Scalping => "Scalping",
            StrategyTag::Swing => "Swing",
            StrategyTag::DayTrade => "Day Trade",
            StrategyTag::News => "News",
            StrategyTag::Breakout => "Breakout",
            StrategyTag::Reversal => "Reversal",
            StrategyTag::TrendFollow => "Trend Follow",
            StrategyTag::MeanReversion => "Mean Reversion",
        }
    }
}

impl FromStr for StrategyTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(&Self::ALL, "strategy tag", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmotionTag {
    Calm,
    Confident,
    Fomo,
    Revenge,
    Anxious,
    Greedy,
    Tired,
}

impl EmotionTag {
    pub const ALL: [EmotionTag; 7] = [
        EmotionTag::Calm,
        EmotionTag::Confident,
        EmotionTag::Fomo,
        EmotionTag::Revenge,
        EmotionTag::Anxious,
        EmotionTag::Greedy,
        EmotionTag::Tired,
    ];
}

impl Category for EmotionTag {
    fn key(&self) -> &'static str {
        match self {
            EmotionTag::Calm => "calm",
            EmotionTag::Confident => "confident",
            EmotionTag::Fomo => "fomo",
            EmotionTag::Revenge => "revenge",
            EmotionTag::Anxious => "anxious",
            EmotionTag::Greedy => "greedy",
            EmotionTag::Tired => "tired",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EmotionTag::Calm => "Calm",
            EmotionTag::Confident => "Confident",
            EmotionTag::Fomo => "FOMO",
            EmotionTag::Revenge => "Revenge",
            EmotionTag::Anxious => "Anxious",
            EmotionTag::Greedy => "Greedy",
            EmotionTag::Tired => "Tired",
        }
    }
}

impl FromStr for EmotionTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(&Self::ALL, "emotion tag", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MistakeTag {
    OverLeveraged,
    NoStopLoss,
    EarlyExit,
    LateEntry,
    RevengeTrade,
    IgnoredPlan,
    Chased,
    NoPlan,
}

impl MistakeTag {
    pub const ALL: [MistakeTag; 8] = [
        MistakeTag::OverLeveraged,
        MistakeTag::NoStopLoss,
        MistakeTag::EarlyExit,
        MistakeTag::LateEntry,
        MistakeTag::RevengeTrade,
        MistakeTag::IgnoredPlan,
        MistakeTag::Chased,
        MistakeTag::NoPlan,
    ];
}

impl Category for MistakeTag {
    fn key(&self) -> &'static str {
        match self {
            MistakeTag::OverLeveraged => "over-leveraged",
            MistakeTag::NoStopLoss => "no-stop-loss",
            MistakeTag::EarlyExit => "early-exit",
            MistakeTag::LateEntry => "late-entry",
            MistakeTag::RevengeTrade => "revenge-trade",
            MistakeTag::IgnoredPlan => "ignored-plan",
            MistakeTag::Chased => "chased",
            MistakeTag::NoPlan => "no-plan",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MistakeTag::OverLeveraged => "Over-sized",
            MistakeTag::NoStopLoss => "No SL",
            MistakeTag::EarlyExit => "Early Exit",
            MistakeTag::LateEntry => "Late Entry",
            MistakeTag::RevengeTrade => "Revenge Trade",
            MistakeTag::IgnoredPlan => "Ignored Plan",
            MistakeTag::Chased => "Chased",
            MistakeTag::NoPlan => "No Plan",
        }
    }
}

impl FromStr for MistakeTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(&Self::ALL, "mistake tag", s)
    }
}

/// The kinds of discipline rule a trader can set for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    DailyLoss,
    DailyProfit,
    MaxTrades,
}

impl RuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::DailyLoss => "Daily Loss Limit",
            RuleKind::DailyProfit => "Daily Profit Target",
            RuleKind::MaxTrades => "Max Trades / Day",
        }
    }
}

impl FromStr for RuleKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily-loss" => Ok(RuleKind::DailyLoss),
            "daily-profit" => Ok(RuleKind::DailyProfit),
            "max-trades" => Ok(RuleKind::MaxTrades),
            other => Err(CoreError::InvalidInput("rule kind".to_string(), other.to_string())),
        }
    }
}
