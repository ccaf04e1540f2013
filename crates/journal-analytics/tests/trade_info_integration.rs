//! TradeInfo trait 통합 테스트
//!
//! 매매일지의 `Trade`가 아닌 타입도 TradeInfo만 구현하면
//! 통계, 자산 곡선, 전략별 집계를 계산할 수 있는지 확인합니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use journal_analytics::{aggregate_by_strategy, build_equity_curve, compute_stats};
use journal_core::{Pnl, TradeInfo, TradeStatus};

/// 테스트용 거래 구조체 (외부 가져오기 형식 등)
#[derive(Debug, Clone)]
struct TestTrade {
    symbol: String,
    closed: bool,
    pnl: Option<Pnl>,
    date: NaiveDate,
    setup: String,
}

impl TradeInfo for TestTrade {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn status(&self) -> TradeStatus {
        if self.closed {
            TradeStatus::Closed
        } else {
            TradeStatus::Open
        }
    }

    fn pnl(&self) -> Option<Pnl> {
        self.pnl
    }

    fn entry_date(&self) -> NaiveDate {
        self.date
    }

    fn strategy(&self) -> &str {
        &self.setup
    }
}

fn test_trade(day: u32, closed: bool, pnl: Option<Decimal>, setup: &str) -> TestTrade {
    TestTrade {
        symbol: "BTC/USDT".to_string(),
        closed,
        pnl,
        date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
        setup: setup.to_string(),
    }
}

#[test]
fn test_stats_from_custom_trade_type() {
    let trades = vec![
        test_trade(1, true, Some(dec!(95)), "ORB"),
        test_trade(2, true, Some(dec!(47)), "VWAP"),
        test_trade(3, true, Some(dec!(-32)), "ORB"),
        test_trade(4, false, None, "ORB"),
    ];

    let stats = compute_stats(&trades);

    assert_eq!(stats.total_trades, 3);
    assert_eq!(stats.winning_trades, 2);
    assert_eq!(stats.losing_trades, 1);
    assert_eq!(stats.net_pnl, dec!(110));
    // 평균 수익 = (95 + 47) / 2 = 71
    assert_eq!(stats.avg_win, dec!(71));
    assert_eq!(stats.avg_loss, dec!(32));
    // 프로핏 팩터 = 142 / 32 = 4.4375
    assert_eq!(stats.profit_factor, dec!(4.4375));
    assert!(stats.win_rate_pct() > dec!(66.0) && stats.win_rate_pct() < dec!(67.0));
    assert_eq!(stats.max_drawdown, dec!(32));
}

#[test]
fn test_default_is_realized() {
    assert!(test_trade(1, true, Some(dec!(0)), "A").is_realized());
    assert!(!test_trade(1, true, None, "A").is_realized());
    assert!(!test_trade(1, false, Some(dec!(10)), "A").is_realized());
}

#[test]
fn test_curve_and_strategy_from_custom_trade_type() {
    let trades = vec![
        test_trade(2, true, Some(dec!(-5)), "ORB"),
        test_trade(1, true, Some(dec!(20)), "VWAP"),
        test_trade(3, false, Some(dec!(8)), "ORB"),
    ];

    let curve = build_equity_curve(&trades);
    assert_eq!(curve.len(), 3);
    assert_eq!(curve[1].date, "2024-07-01");
    assert_eq!(curve[2].equity, dec!(15));

    let totals = aggregate_by_strategy(&trades);
    assert_eq!(totals["ORB"], dec!(3));
    assert_eq!(totals["VWAP"], dec!(20));
}
