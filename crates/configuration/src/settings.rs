use core_types::RuleKind;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: Account,
    #[serde(default)]
    pub discipline: Discipline,
}

/// Contains parameters describing the trading account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// The account balance the equity curve starts from.
    pub balance: Decimal,
}

/// Contains the trader's daily guardrails.
#[derive(Debug, Clone, Deserialize)]
pub struct Discipline {
    /// A day's P&L below this value raises a danger alert on the dashboard.
    #[serde(default = "default_alert_loss_threshold")]
    pub alert_loss_threshold: Decimal,
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleSettings>,
}

/// Parameters for one discipline rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuleSettings {
    pub id: String,
    pub label: String,
    pub kind: RuleKind,
    /// Magnitude of the limit. Daily loss limits may be written with or
    /// without a minus sign.
    pub threshold: Decimal,
}

// --- Default Implementations ---
// A config file may omit any section and still load with the starter values.

impl Default for Account {
    fn default() -> Self {
        Self {
            balance: Decimal::from(12925),
        }
    }
}

impl Default for Discipline {
    fn default() -> Self {
        Self {
            alert_loss_threshold: default_alert_loss_threshold(),
            rules: default_rules(),
        }
    }
}

fn default_alert_loss_threshold() -> Decimal {
    Decimal::from(-300)
}

fn default_rules() -> Vec<RuleSettings> {
    vec![
        RuleSettings {
            id: "r1".to_string(),
            label: "Daily Loss Limit".to_string(),
            kind: RuleKind::DailyLoss,
            threshold: Decimal::from(-500),
        },
        RuleSettings {
            id: "r2".to_string(),
            label: "Max Trades Per Day".to_string(),
            kind: RuleKind::MaxTrades,
            threshold: Decimal::from(5),
        },
        RuleSettings {
            id: "r3".to_string(),
            label: "Daily Profit Target".to_string(),
            kind: RuleKind::DailyProfit,
            threshold: Decimal::from(1000),
        },
    ]
}
