//! 거래 기록 추가/수정/삭제/조회 명령.

use anyhow::{Context, Result};
use journal_core::{
    DecimalExt, Journal, JournalError, Price, Quantity, Trade, TradeDraft, TradeSide, TradeStatus,
    DATE_FORMAT,
};
use rust_decimal::Decimal;
use tracing::info;

use super::output::{escape_csv, truncate, OutputFormat};

/// 새 거래 입력값.
#[derive(Debug, Clone)]
pub struct TradeArgs {
    pub symbol: String,
    pub side: TradeSide,
    pub status: TradeStatus,
    pub entry_date: String,
    pub exit_date: Option<String>,
    pub entry_price: Price,
    pub exit_price: Option<Price>,
    pub quantity: Quantity,
    pub fees: Decimal,
    pub strategy: String,
    pub notes: String,
}

impl From<TradeArgs> for TradeDraft {
    fn from(args: TradeArgs) -> Self {
        TradeDraft {
            symbol: args.symbol,
            side: args.side,
            status: args.status,
            entry_date: args.entry_date,
            exit_date: args.exit_date,
            entry_price: args.entry_price,
            exit_price: args.exit_price,
            quantity: args.quantity,
            fees: args.fees,
            strategy: args.strategy,
            notes: args.notes,
        }
    }
}

/// 기존 거래 수정값. 지정한 필드만 바뀝니다.
#[derive(Debug, Clone, Default)]
pub struct TradeUpdate {
    pub symbol: Option<String>,
    pub side: Option<TradeSide>,
    pub status: Option<TradeStatus>,
    pub entry_date: Option<String>,
    pub exit_date: Option<String>,
    pub entry_price: Option<Price>,
    pub exit_price: Option<Price>,
    pub quantity: Option<Quantity>,
    pub fees: Option<Decimal>,
    pub strategy: Option<String>,
    pub notes: Option<String>,
    /// 청산 가격과 청산일을 비웁니다 (새 값보다 먼저 적용).
    pub clear_exit: bool,
}

impl TradeUpdate {
    fn apply(self, mut draft: TradeDraft) -> TradeDraft {
        if self.clear_exit {
            draft.exit_price = None;
            draft.exit_date = None;
        }
        if let Some(symbol) = self.symbol {
            draft.symbol = symbol;
        }
        if let Some(side) = self.side {
            draft.side = side;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(entry_date) = self.entry_date {
            draft.entry_date = entry_date;
        }
        if self.exit_date.is_some() {
            draft.exit_date = self.exit_date;
        }
        if let Some(entry_price) = self.entry_price {
            draft.entry_price = entry_price;
        }
        if self.exit_price.is_some() {
            draft.exit_price = self.exit_price;
        }
        if let Some(quantity) = self.quantity {
            draft.quantity = quantity;
        }
        if let Some(fees) = self.fees {
            draft.fees = fees;
        }
        if let Some(strategy) = self.strategy {
            draft.strategy = strategy;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }
        draft
    }
}

/// 거래를 검증하여 매매일지 맨 앞에 추가합니다.
pub fn add_trade(journal: &mut Journal, args: TradeArgs) -> Result<Trade> {
    let trade = TradeDraft::from(args)
        .into_trade()
        .context("Failed to add trade")?;

    info!(trade_id = %trade.id, symbol = %trade.symbol, "Trade added");
    journal.add(trade.clone());

    Ok(trade)
}

/// 기존 거래를 수정합니다. ID와 목록 내 위치는 유지되며 손익은 다시 계산됩니다.
pub fn edit_trade(journal: &mut Journal, id: &str, update: TradeUpdate) -> Result<Trade> {
    let existing = journal
        .get(id)
        .ok_or_else(|| JournalError::NotFound(format!("trade {}", id)))?;

    let trade = update
        .apply(TradeDraft::from(existing))
        .into_trade_with_id(id)
        .with_context(|| format!("Failed to update trade {}", id))?;

    info!(trade_id = %trade.id, pnl = ?trade.pnl, "Trade updated");
    journal.upsert(trade.clone());

    Ok(trade)
}

/// 거래를 삭제합니다.
pub fn delete_trade(journal: &mut Journal, id: &str) -> Result<Trade> {
    let removed = journal.remove(id)?;
    info!(trade_id = %removed.id, symbol = %removed.symbol, "Trade deleted");
    Ok(removed)
}

/// 거래 목록을 지정한 형식으로 렌더링합니다.
///
/// 검색어는 종목과 전략 라벨에 대해 대소문자 구분 없이 적용됩니다.
pub fn list_trades(journal: &Journal, search: Option<&str>, format: OutputFormat) -> Result<String> {
    let trades = journal.search(search.unwrap_or_default());

    match format {
        OutputFormat::Table => Ok(format_table(&trades)),
        OutputFormat::Csv => Ok(format_csv(&trades)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&trades).context("Failed to serialize to JSON")
        }
    }
}

/// 테이블 형식 출력.
fn format_table(trades: &[&Trade]) -> String {
    let mut output = String::new();

    // 헤더
    output.push_str(&format!(
        "{:<32} {:<10} {:<10} {:<5} {:<6} {:>12} {:>12} {:>10} {:>12} {:<16}\n",
        "ID", "DATE", "SYMBOL", "SIDE", "STATUS", "ENTRY", "EXIT", "QTY", "P&L", "STRATEGY"
    ));
    output.push_str(&"-".repeat(134));
    output.push('\n');

    // 데이터
    for trade in trades {
        output.push_str(&format!(
            "{:<32} {:<10} {:<10} {:<5} {:<6} {:>12} {:>12} {:>10} {:>12} {:<16}\n",
            trade.id,
            trade.entry_date.format(DATE_FORMAT).to_string(),
            truncate(&trade.symbol, 10),
            trade.side.as_str(),
            trade.status.as_str(),
            trade.entry_price,
            trade
                .exit_price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            trade.quantity,
            trade
                .pnl
                .map(|p| p.to_signed_string())
                .unwrap_or_else(|| "-".to_string()),
            truncate(&trade.strategy, 16),
        ));
    }

    // 요약
    output.push('\n');
    output.push_str(&format!("Total: {} trades", trades.len()));

    output
}

/// CSV 형식 출력.
fn format_csv(trades: &[&Trade]) -> String {
    let mut output = String::new();

    // 헤더
    output.push_str(
        "id,symbol,side,status,entry_date,exit_date,entry_price,exit_price,quantity,fees,strategy,notes,pnl\n",
    );

    // 데이터
    for trade in trades {
        output.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            trade.id,
            escape_csv(&trade.symbol),
            trade.side,
            trade.status,
            trade.entry_date.format(DATE_FORMAT),
            trade
                .exit_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            trade.entry_price,
            trade.exit_price.map(|p| p.to_string()).unwrap_or_default(),
            trade.quantity,
            trade.fees,
            escape_csv(&trade.strategy),
            escape_csv(&trade.notes),
            trade.pnl.map(|p| p.to_string()).unwrap_or_default(),
        ));
    }

    output
}
