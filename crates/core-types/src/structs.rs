use crate::enums::{EmotionTag, MarketType, MistakeTag, StrategyTag, TradeDirection};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single journal entry: one position from entry to (optional) exit.
///
/// Field names serialize in camelCase so that a journal export can be
/// deserialized directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub market: MarketType,
    pub symbol: String,
    pub direction: TradeDirection,

    // Pricing
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>, // None while the position is open
    pub size: Decimal,
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    #[serde(default)]
    pub take_profit: Option<Decimal>,

    // Outcome, net of fees
    pub pnl: Decimal,
    #[serde(default)]
    pub fees: Decimal,
    #[serde(default)]
    pub risk_reward_ratio: Option<Decimal>,

    // Tagging
    #[serde(default)]
    pub strategy_tags: Vec<StrategyTag>,
    #[serde(default)]
    pub emotion_tags: Vec<EmotionTag>,
    #[serde(default)]
    pub mistake_tags: Vec<MistakeTag>,

    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub screenshot_url: Option<String>,

    // Lifecycle
    pub is_open: bool,
    pub opened_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Trade {
    /// A trade counts for analytics only once it is flagged closed *and*
    /// carries a close timestamp.
    pub fn is_closed(&self) -> bool {
        !self.is_open && self.closed_at.is_some()
    }

    /// The instant P&L was realized: `closed_at`, falling back to `opened_at`.
    pub fn effective_time(&self) -> DateTime<Utc> {
        self.closed_at.unwrap_or(self.opened_at)
    }

    /// The UTC calendar day of `effective_time`.
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_time().date_naive()
    }

    pub fn is_win(&self) -> bool {
        self.pnl > Decimal::ZERO
    }

    pub fn is_loss(&self) -> bool {
        self.pnl < Decimal::ZERO
    }
}
