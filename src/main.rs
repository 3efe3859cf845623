use analytics::rounding::{round_cents, round_to};
use analytics::{AnalyticsEngine, AnalyticsReport, DashboardStats, GroupBreakdown};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::{Config, load_config};
use core_types::Trade;
use discipline::{DisciplineAlert, RuleBook, RuleStatus, check_new_trade, format_pnl};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // A missing .env is fine; it only supplies TRADEFORGE_* overrides.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Rules(args) => handle_rules(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance analytics and discipline checks for a trading journal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full analytics report for a journal.
    Report(ReportArgs),
    /// Check the day's activity against the configured discipline rules.
    Rules(RulesArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to the journal, a JSON array of trades.
    #[arg(long, short)]
    trades: PathBuf,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// The day treated as "today" for period P&L (format: YYYY-MM-DD). Defaults to the current UTC date.
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Parser)]
struct RulesArgs {
    /// Path to the journal, a JSON array of trades.
    #[arg(long, short)]
    trades: PathBuf,

    /// The day to evaluate (format: YYYY-MM-DD). Defaults to the current UTC date.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Projected P&L of a trade about to be placed; reports the rules it would violate.
    #[arg(long, allow_hyphen_values = true)]
    potential_pnl: Option<Decimal>,
}

/// Everything the `report --json` command prints.
#[derive(Serialize)]
struct ReportOutput<'a> {
    report: &'a AnalyticsReport,
    dashboard: &'a DashboardStats,
    alert: Option<&'a DisciplineAlert>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn read_trades(path: &Path) -> Result<Vec<Trade>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trades from {}", path.display()))?;
    let trades: Vec<Trade> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse trades in {}", path.display()))?;
    tracing::info!(count = trades.len(), path = %path.display(), "Loaded journal.");
    Ok(trades)
}

fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let trades = read_trades(&args.trades)?;
    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());

    let engine = AnalyticsEngine::new();
    let report = engine.calculate(&trades);
    let dashboard = engine.dashboard(&report, today, config.account.balance);
    let rule_book = RuleBook::new(&config.discipline)?;
    // Same closed-trade figure the dashboard shows for today.
    let alert = rule_book.alert(dashboard.period_pnl.today);

    if args.json {
        let output = ReportOutput {
            report: &report,
            dashboard: &dashboard,
            alert: alert.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(alert) = &alert {
        println!("[{:?}] {}\n", alert.level, alert.message);
    }
    print_summary(&report, &dashboard);
    print_breakdown("Markets", &report.market_breakdown);
    print_breakdown("Strategies", &report.strategy_breakdown);
    print_tags(&report);
    print_time_slots(&report);
    Ok(())
}

fn handle_rules(args: RulesArgs, config: &Config) -> Result<()> {
    let trades = read_trades(&args.trades)?;
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let rule_book = RuleBook::new(&config.discipline)?;
    let statuses = rule_book.evaluate(&trades, date);
    print_rules(date, &statuses);

    if let Some(potential) = args.potential_pnl {
        let violations = check_new_trade(&statuses, Some(potential));
        if violations.is_empty() {
            println!("A trade of {} breaks no rules.", format_pnl(potential));
        } else {
            for violation in violations {
                println!("Violation: {}", violation);
            }
        }
    }
    Ok(())
}

// ==============================================================================
// Output
// ==============================================================================

fn print_summary(report: &AnalyticsReport, dashboard: &DashboardStats) {
    let summary = &report.summary;
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);

    let best_trade = summary
        .best_trade
        .as_ref()
        .map_or("-".to_string(), |t| format!("{} {}", t.symbol, format_pnl(t.pnl)));
    let worst_trade = summary
        .worst_trade
        .as_ref()
        .map_or("-".to_string(), |t| format!("{} {}", t.symbol, format_pnl(t.pnl)));
    let max_drawdown = report
        .cumulative_pnl
        .iter()
        .map(|p| p.drawdown)
        .min()
        .unwrap_or(Decimal::ZERO);

    table.add_row(vec!["Closed Trades".to_string(), report.closed_trades.to_string()]);
    table.add_row(vec!["Total P&L".to_string(), format_pnl(summary.total_pnl)]);
    table.add_row(vec!["Win Rate".to_string(), percent(summary.win_rate, 1)]);
    table.add_row(vec![
        "Wins / Losses / Breakeven".to_string(),
        format!("{} / {} / {}", summary.wins, summary.losses, summary.breakeven),
    ]);
    table.add_row(vec!["Profit Factor".to_string(), summary.profit_factor.to_string()]);
    table.add_row(vec!["Expectancy".to_string(), format_pnl(summary.expectancy)]);
    table.add_row(vec!["Avg Win".to_string(), format_pnl(summary.avg_win)]);
    table.add_row(vec!["Avg Loss".to_string(), format_pnl(-summary.avg_loss)]);
    table.add_row(vec!["Avg R:R".to_string(), format!("{:.2}", round_cents(summary.avg_risk_reward))]);
    table.add_row(vec!["Best Trade".to_string(), best_trade]);
    table.add_row(vec!["Worst Trade".to_string(), worst_trade]);
    table.add_row(vec!["Total Fees".to_string(), format!("${:.2}", round_cents(summary.total_fees))]);
    table.add_row(vec!["Max Drawdown".to_string(), percent(max_drawdown, 2)]);
    table.add_row(vec!["Today".to_string(), format_pnl(dashboard.period_pnl.today)]);
    table.add_row(vec!["This Week".to_string(), format_pnl(dashboard.period_pnl.week)]);
    table.add_row(vec!["This Month".to_string(), format_pnl(dashboard.period_pnl.month)]);
    table.add_row(vec![
        "Current Streak".to_string(),
        format!("{} {:?}", dashboard.current_streak.count, dashboard.current_streak.kind),
    ]);
    if let Some(point) = dashboard.equity_curve.last() {
        table.add_row(vec!["Equity".to_string(), format!("${:.2}", round_cents(point.equity))]);
    }

    println!("--- Summary ---\n{table}\n");
}

/// Percentages are rounded half away from zero before formatting; `{:.N}`
/// alone would truncate a `Decimal`.
fn percent(value: Decimal, dp: u32) -> String {
    format!("{:.*}%", dp as usize, round_to(value, dp))
}

fn print_breakdown(title: &str, rows: &[GroupBreakdown]) {
    if rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Name", "P&L", "Trades", "Win Rate"]);
    for row in rows {
        table.add_row(vec![
            row.label.clone(),
            format_pnl(row.pnl),
            row.trade_count.to_string(),
            format!("{}%", row.win_rate),
        ]);
    }
    println!("--- {title} ---\n{table}\n");
}

fn print_tags(report: &AnalyticsReport) {
    if !report.emotion_impact.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Emotion", "Avg P&L", "Trades", "Total P&L"]);
        for row in &report.emotion_impact {
            table.add_row(vec![
                row.label.clone(),
                format_pnl(row.avg_pnl),
                row.trade_count.to_string(),
                format_pnl(row.total_pnl),
            ]);
        }
        println!("--- Emotions ---\n{table}\n");
    }

    if !report.mistake_costs.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Mistake", "Count", "Total Cost", "Avg Cost"]);
        for row in &report.mistake_costs {
            table.add_row(vec![
                row.label.clone(),
                row.count.to_string(),
                format_pnl(row.total_cost),
                format_pnl(row.avg_cost),
            ]);
        }
        println!("--- Mistakes ---\n{table}\n");
    }
}

fn print_time_slots(report: &AnalyticsReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Slot", "P&L", "Trades", "Win Rate"]);
    for slot in report
        .hourly_analysis
        .iter()
        .chain(report.day_of_week_analysis.iter().filter(|d| d.trade_count > 0))
    {
        table.add_row(vec![
            slot.label.clone(),
            format_pnl(slot.pnl),
            slot.trade_count.to_string(),
            format!("{}%", slot.win_rate),
        ]);
    }
    println!("--- Entry Timing ---\n{table}");
}

fn print_rules(date: NaiveDate, statuses: &[RuleStatus]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Rule", "Kind", "Current", "Limit", "Progress", "Status"]);
    for status in statuses {
        let state = if status.is_breached {
            "BREACHED"
        } else if status.is_near_breach {
            "Near limit"
        } else {
            "OK"
        };
        table.add_row(vec![
            status.rule.label.clone(),
            status.rule.kind.label().to_string(),
            status.current_value.normalize().to_string(),
            status.rule.threshold.normalize().to_string(),
            percent(status.progress_pct, 0),
            state.to_string(),
        ]);
    }
    println!("--- Discipline rules for {date} ---\n{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::CumulativePoint;
    use rust_decimal_macros::dec;

    #[test]
    fn win_rate_rounds_instead_of_truncating() {
        // Two wins out of three trades.
        let win_rate = Decimal::from(2) / Decimal::from(3) * Decimal::ONE_HUNDRED;
        assert_eq!(percent(win_rate, 1), "66.7%");
        assert_eq!(percent(dec!(79.5), 0), "80%");
    }

    #[test]
    fn drawdown_is_shown_as_a_percentage() {
        // +200 then -100: half of the peak given back.
        let cumulative = vec![
            CumulativePoint { date: "2026-02-19".parse().unwrap(), pnl: dec!(200), drawdown: dec!(0) },
            CumulativePoint { date: "2026-02-20".parse().unwrap(), pnl: dec!(100), drawdown: dec!(-50) },
        ];
        let max_drawdown = cumulative.iter().map(|p| p.drawdown).min().unwrap_or(Decimal::ZERO);
        assert_eq!(percent(max_drawdown, 2), "-50.00%");
    }

    #[test]
    fn alert_ignores_trades_without_a_close_time() {
        // The second entry is flagged closed but was never given a close time,
        // so analytics leaves it out of today's P&L and no alert fires.
        let trades: Vec<Trade> = serde_json::from_value(serde_json::json!([
            {
                "id": "a", "market": "crypto", "symbol": "BTC/USDT", "direction": "long",
                "entryPrice": 42150, "exitPrice": 42100, "size": 1, "pnl": -50,
                "isOpen": false,
                "openedAt": "2026-02-20T08:00:00Z", "closedAt": "2026-02-20T09:00:00Z"
            },
            {
                "id": "b", "market": "crypto", "symbol": "ETH/USDT", "direction": "long",
                "entryPrice": 2480, "exitPrice": null, "size": 2, "pnl": -400,
                "isOpen": false,
                "openedAt": "2026-02-20T10:00:00Z", "closedAt": null
            }
        ]))
        .unwrap();
        let today: NaiveDate = "2026-02-20".parse().unwrap();

        let engine = AnalyticsEngine::new();
        let report = engine.calculate(&trades);
        let dashboard = engine.dashboard(&report, today, dec!(12925));
        assert_eq!(dashboard.period_pnl.today, dec!(-50));

        let rule_book = RuleBook::new(&configuration::Discipline::default()).unwrap();
        assert!(rule_book.alert(dashboard.period_pnl.today).is_none());
    }
}
