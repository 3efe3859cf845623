//! Trade fixtures shared by the unit tests of this crate.

use chrono::{DateTime, Utc};
use core_types::{MarketType, Trade, TradeDirection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub(crate) fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("fixture timestamps are RFC 3339")
        .with_timezone(&Utc)
}

pub(crate) fn closed_trade(id: &str, pnl: Decimal, opened_at: &str, closed_at: &str) -> Trade {
    Trade {
        id: id.to_string(),
        market: MarketType::Crypto,
        symbol: "BTC/USDT".to_string(),
        direction: TradeDirection::Long,
        entry_price: dec!(100),
        exit_price: Some(dec!(101)),
        size: dec!(1),
        stop_loss: None,
        take_profit: None,
        pnl,
        fees: Decimal::ZERO,
        risk_reward_ratio: None,
        strategy_tags: Vec::new(),
        emotion_tags: Vec::new(),
        mistake_tags: Vec::new(),
        notes: String::new(),
        screenshot_url: None,
        is_open: false,
        opened_at: at(opened_at),
        closed_at: Some(at(closed_at)),
    }
}

pub(crate) fn open_trade(id: &str, opened_at: &str) -> Trade {
    Trade {
        exit_price: None,
        is_open: true,
        closed_at: None,
        ..closed_trade(id, Decimal::ZERO, opened_at, opened_at)
    }
}
