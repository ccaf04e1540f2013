//! 대시보드 리포트 명령 (통계, 자산 곡선, 전략별 손익).

use anyhow::{Context, Result};
use journal_analytics::{build_equity_curve, compute_stats, ChartData, StrategyPnl};
use journal_core::{DecimalExt, Trade, TradeStats};
use rust_decimal::Decimal;

use super::output::{escape_csv, truncate, OutputFormat};

/// 성과 통계 리포트.
pub fn stats_report(trades: &[Trade], format: OutputFormat) -> Result<String> {
    let stats = compute_stats(trades);

    match format {
        OutputFormat::Table => Ok(format_stats_table(&stats)),
        OutputFormat::Csv => Ok(format_stats_csv(&stats)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&stats).context("Failed to serialize to JSON")
        }
    }
}

/// 자산 곡선 리포트.
pub fn equity_report(trades: &[Trade], format: OutputFormat) -> Result<String> {
    let curve = build_equity_curve(trades);

    match format {
        OutputFormat::Table => Ok(format_curve_table(&curve)),
        OutputFormat::Csv => Ok(format_curve_csv(&curve)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&curve).context("Failed to serialize to JSON")
        }
    }
}

/// 전략별 손익 리포트.
pub fn strategies_report(trades: &[Trade], format: OutputFormat) -> Result<String> {
    let breakdown = StrategyPnl::from_trades(trades);

    match format {
        OutputFormat::Table => Ok(format_strategy_table(&breakdown)),
        OutputFormat::Csv => Ok(format_strategy_csv(&breakdown)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&breakdown).context("Failed to serialize to JSON")
        }
    }
}

fn stats_rows(stats: &TradeStats) -> Vec<(&'static str, String)> {
    vec![
        ("Total Trades", stats.total_trades.to_string()),
        ("Win Rate", stats.win_rate.to_percentage_string()),
        ("Net P&L", stats.net_pnl.to_signed_string()),
        ("Avg Trade", stats.avg_trade_pnl().to_signed_string()),
        ("Avg Win", fixed2(stats.avg_win)),
        ("Avg Loss", fixed2(stats.avg_loss)),
        ("Profit Factor", fixed2(stats.profit_factor)),
        ("Max Drawdown", fixed2(stats.max_drawdown)),
        ("Winning Trades", stats.winning_trades.to_string()),
        ("Losing Trades", stats.losing_trades.to_string()),
    ]
}

fn fixed2(value: Decimal) -> String {
    format!("{:.2}", value.round_half_up(2))
}

fn format_stats_table(stats: &TradeStats) -> String {
    let mut output = String::new();

    for (label, value) in stats_rows(stats) {
        output.push_str(&format!("{:<16} {:>14}\n", label, value));
    }

    if stats.is_empty() {
        output.push_str("\nNo closed trades with P&L yet.");
    }

    output
}

fn format_stats_csv(stats: &TradeStats) -> String {
    let mut output = String::from("metric,value\n");

    for (label, value) in stats_rows(stats) {
        output.push_str(&format!("{},{}\n", escape_csv(label), value));
    }

    output
}

fn format_curve_table(curve: &[ChartData]) -> String {
    if curve.is_empty() {
        return "No closed trades with P&L yet.".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!("{:<10} {:>14} {:>14}\n", "DATE", "EQUITY", "P&L"));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for point in curve {
        output.push_str(&format!(
            "{:<10} {:>14} {:>14}\n",
            point.date,
            point.equity.to_signed_string(),
            point.pnl.to_signed_string()
        ));
    }

    output
}

fn format_curve_csv(curve: &[ChartData]) -> String {
    let mut output = String::from("date,equity,pnl\n");

    for point in curve {
        output.push_str(&format!("{},{},{}\n", point.date, point.equity, point.pnl));
    }

    output
}

fn format_strategy_table(breakdown: &[StrategyPnl]) -> String {
    if breakdown.is_empty() {
        return "No trades yet.".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!("{:<24} {:>8} {:>14}\n", "STRATEGY", "TRADES", "P&L"));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for row in breakdown {
        output.push_str(&format!(
            "{:<24} {:>8} {:>14}\n",
            truncate(&row.strategy, 24),
            row.trade_count,
            row.pnl.to_signed_string()
        ));
    }

    output
}

fn format_strategy_csv(breakdown: &[StrategyPnl]) -> String {
    let mut output = String::from("strategy,trades,pnl\n");

    for row in breakdown {
        output.push_str(&format!(
            "{},{},{}\n",
            escape_csv(&row.strategy),
            row.trade_count,
            row.pnl
        ));
    }

    output
}
