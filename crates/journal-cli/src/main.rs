//! 매매일지 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 청산된 거래 기록
//! journal add -s AAPL --side long -e 2024-01-02 -p 180 -q 10 --exit-price 185 --strategy Breakout
//!
//! # 보유 중인 거래 기록
//! journal add -s TSLA --side short --status open -e 2024-01-03 -p 240 -q 5
//!
//! # 거래 청산 처리
//! journal edit <ID> --status closed --exit-price 232 --exit-date 2024-01-05
//!
//! # 청산 기록 되돌리기
//! journal edit <ID> --status open --clear-exit
//!
//! # 대시보드 리포트
//! journal stats
//! journal equity --format csv
//! journal strategies --format json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::error;

use journal_cli::commands::coach::coaching_request_json;
use journal_cli::commands::report::{equity_report, stats_report, strategies_report};
use journal_cli::commands::trades::{
    add_trade, delete_trade, edit_trade, list_trades, TradeArgs, TradeUpdate,
};
use journal_cli::commands::OutputFormat;
use journal_cli::JournalStore;
use journal_core::{
    init_logging, AppConfig, LogConfig, TradeSide, TradeStatus, DEFAULT_CONFIG_PATH,
    DEFAULT_STRATEGY,
};

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Trading journal - 거래 기록과 성과 분석", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 매매일지 파일 경로 (설정의 journal.data_path를 덮어씀)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 거래 기록 추가
    Add {
        /// 종목 심볼 (예: AAPL, BTCUSDT)
        #[arg(short, long)]
        symbol: String,

        /// 방향 (LONG, SHORT)
        #[arg(long, default_value = "LONG")]
        side: TradeSide,

        /// 상태 (OPEN, CLOSED)
        #[arg(long, default_value = "CLOSED")]
        status: TradeStatus,

        /// 진입일 (YYYY-MM-DD)
        #[arg(short, long)]
        entry_date: String,

        /// 청산일 (YYYY-MM-DD)
        #[arg(long)]
        exit_date: Option<String>,

        /// 진입 가격
        #[arg(short = 'p', long)]
        entry_price: Decimal,

        /// 청산 가격
        #[arg(long)]
        exit_price: Option<Decimal>,

        /// 수량
        #[arg(short, long)]
        quantity: Decimal,

        /// 수수료
        #[arg(long, default_value = "0")]
        fees: Decimal,

        /// 전략 라벨
        #[arg(long, default_value = DEFAULT_STRATEGY)]
        strategy: String,

        /// 메모
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// 거래 기록 수정 (지정한 필드만 변경)
    Edit {
        /// 거래 ID
        id: String,

        #[arg(short, long)]
        symbol: Option<String>,

        #[arg(long)]
        side: Option<TradeSide>,

        #[arg(long)]
        status: Option<TradeStatus>,

        #[arg(short, long)]
        entry_date: Option<String>,

        #[arg(long)]
        exit_date: Option<String>,

        #[arg(short = 'p', long)]
        entry_price: Option<Decimal>,

        #[arg(long)]
        exit_price: Option<Decimal>,

        #[arg(short, long)]
        quantity: Option<Decimal>,

        #[arg(long)]
        fees: Option<Decimal>,

        #[arg(long)]
        strategy: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,

        /// 청산 가격과 청산일 비우기
        #[arg(long)]
        clear_exit: bool,
    },

    /// 거래 기록 삭제
    Delete {
        /// 거래 ID
        id: String,
    },

    /// 거래 목록 조회
    List {
        /// 검색어 (종목 또는 전략, 대소문자 무시)
        #[arg(short, long)]
        search: Option<String>,

        /// 출력 형식 (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 성과 통계
    Stats {
        /// 출력 형식 (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 자산 곡선
    Equity {
        /// 출력 형식 (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 전략별 손익
    Strategies {
        /// 출력 형식 (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// AI 코칭 요청 본문 출력
    Coach,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config.display()))?;

    init_logging(LogConfig::from_config(&config.logging))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let store = JournalStore::new(cli.data.unwrap_or_else(|| config.journal.data_path.clone()));

    if let Err(e) = run(cli.command, &store, &config) {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

fn run(command: Commands, store: &JournalStore, config: &AppConfig) -> Result<()> {
    let mut journal = store.load().context("Failed to load journal")?;

    match command {
        Commands::Add {
            symbol,
            side,
            status,
            entry_date,
            exit_date,
            entry_price,
            exit_price,
            quantity,
            fees,
            strategy,
            notes,
        } => {
            let args = TradeArgs {
                symbol,
                side,
                status,
                entry_date,
                exit_date,
                entry_price,
                exit_price,
                quantity,
                fees,
                strategy,
                notes,
            };

            let trade = add_trade(&mut journal, args)?;
            store.save(&journal).context("Failed to save journal")?;
            println!("✅ Added trade {}", trade.id);
        }

        Commands::Edit {
            id,
            symbol,
            side,
            status,
            entry_date,
            exit_date,
            entry_price,
            exit_price,
            quantity,
            fees,
            strategy,
            notes,
            clear_exit,
        } => {
            let update = TradeUpdate {
                symbol,
                side,
                status,
                entry_date,
                exit_date,
                entry_price,
                exit_price,
                quantity,
                fees,
                strategy,
                notes,
                clear_exit,
            };

            let trade = edit_trade(&mut journal, &id, update)?;
            store.save(&journal).context("Failed to save journal")?;
            println!("✅ Updated trade {}", trade.id);
        }

        Commands::Delete { id } => {
            let trade = delete_trade(&mut journal, &id)?;
            store.save(&journal).context("Failed to save journal")?;
            println!("🗑  Deleted trade {} ({})", trade.id, trade.symbol);
        }

        Commands::List { search, format } => {
            let format = OutputFormat::parse(&format)?;
            println!("{}", list_trades(&journal, search.as_deref(), format)?);
        }

        Commands::Stats { format } => {
            let format = OutputFormat::parse(&format)?;
            println!("{}", stats_report(journal.trades(), format)?);
        }

        Commands::Equity { format } => {
            let format = OutputFormat::parse(&format)?;
            println!("{}", equity_report(journal.trades(), format)?);
        }

        Commands::Strategies { format } => {
            let format = OutputFormat::parse(&format)?;
            println!("{}", strategies_report(journal.trades(), format)?);
        }

        Commands::Coach => {
            println!(
                "{}",
                coaching_request_json(journal.trades(), &config.coaching)?
            );
        }
    }

    Ok(())
}
