//! 매매일지 분석 통합 테스트
//!
//! 입력 폼 경로(TradeDraft)로 만든 거래와 임의 생성 거래로
//! 통계, 자산 곡선, 전략별 집계의 성질을 검증합니다.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use journal_analytics::{
    aggregate_by_strategy, build_equity_curve, compute_stats, max_drawdown, ChartData,
    INITIAL_POINT_LABEL,
};
use journal_core::{Journal, Trade, TradeSide, TradeStats, TradeStatus};

fn closed(date: &str, entry: Decimal, exit: Decimal, strategy: &str) -> Trade {
    Trade::draft("btcusdt", TradeSide::Long, date, entry, dec!(1))
        .with_exit_price(exit)
        .with_strategy(strategy)
        .into_trade()
        .unwrap()
}

#[test]
fn test_journal_to_dashboard() {
    let mut journal = Journal::new();
    // 입력 순서는 날짜와 무관 (최신 입력이 앞)
    journal.add(closed("2024-03-01", dec!(100), dec!(200), "Breakout")); // +100
    journal.add(closed("2024-03-03", dec!(100), dec!(150), "Pullback")); // +50
    journal.add(closed("2024-03-02", dec!(300), dec!(150), "Breakout")); // -150
    journal.add(
        Trade::draft("eth", TradeSide::Short, "2024-03-04", dec!(3000), dec!(1))
            .with_status(TradeStatus::Open)
            .with_strategy("Breakout")
            .into_trade()
            .unwrap(),
    );

    let stats = compute_stats(journal.trades());
    assert_eq!(stats.total_trades, 3);
    assert_eq!(stats.net_pnl, dec!(0));
    assert_eq!(stats.gross_win, dec!(150));
    assert_eq!(stats.gross_loss, dec!(150));
    assert_eq!(stats.profit_factor, dec!(1));
    // 날짜순 누적: 100 → -50 → 0
    assert_eq!(stats.max_drawdown, dec!(150));

    let curve = build_equity_curve(journal.trades());
    let equities: Vec<Decimal> = curve.iter().map(|p| p.equity).collect();
    assert_eq!(equities, vec![dec!(0), dec!(100), dec!(-50), dec!(0)]);
    assert_eq!(curve[0].date, INITIAL_POINT_LABEL);
    assert_eq!(curve[1].date, "2024-03-01");

    let by_strategy = aggregate_by_strategy(journal.trades());
    // 첫 등장 순서: 입력 목록의 앞쪽(미청산 Breakout)부터
    let labels: Vec<&str> = by_strategy.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["Breakout", "Pullback"]);
    assert_eq!(by_strategy["Breakout"], dec!(-50));
    assert_eq!(by_strategy["Pullback"], dec!(50));
}

#[test]
fn test_two_point_curve() {
    let trades = vec![
        closed("2024-01-01", dec!(100), dec!(150), "A"),
        closed("2024-01-02", dec!(100), dec!(80), "A"),
    ];

    let curve = build_equity_curve(&trades);
    assert_eq!(
        curve,
        vec![
            ChartData::initial(),
            ChartData {
                date: "2024-01-01".to_string(),
                equity: dec!(50),
                pnl: dec!(50),
            },
            ChartData {
                date: "2024-01-02".to_string(),
                equity: dec!(30),
                pnl: dec!(-20),
            },
        ]
    );
}

#[test]
fn test_fees_flow_into_stats() {
    let trade = Trade::draft("SPY", TradeSide::Long, "2024-06-03", dec!(500), dec!(10))
        .with_exit_price(dec!(500))
        .with_fees(dec!(2))
        .into_trade()
        .unwrap();

    let stats = compute_stats(&[trade]);
    assert_eq!(stats.losing_trades, 1);
    assert_eq!(stats.net_pnl, dec!(-2));
    assert_eq!(stats.max_drawdown, dec!(2));
}

// ==================== 성질 기반 테스트 ====================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn arb_trade() -> impl Strategy<Value = Trade> {
    (
        0i64..20,
        any::<bool>(),
        proptest::option::of(-50_000i64..50_000),
        prop::sample::select(vec!["Breakout", "breakout", "Fade"]),
    )
        .prop_map(|(day, is_closed, cents, strategy)| Trade {
            id: format!("{}-{:?}", day, cents),
            symbol: "TEST".to_string(),
            side: TradeSide::Long,
            status: if is_closed {
                TradeStatus::Closed
            } else {
                TradeStatus::Open
            },
            entry_date: base_date() + Duration::days(day),
            exit_date: None,
            entry_price: dec!(100),
            exit_price: None,
            quantity: dec!(1),
            fees: Decimal::ZERO,
            strategy: strategy.to_string(),
            notes: String::new(),
            pnl: cents.map(|c| Decimal::new(c, 2)),
        })
}

proptest! {
    #[test]
    fn prop_net_pnl_is_gross_win_minus_gross_loss(trades in prop::collection::vec(arb_trade(), 0..40)) {
        let stats = compute_stats(&trades);
        prop_assert_eq!(stats.net_pnl, stats.gross_win - stats.gross_loss);
    }

    #[test]
    fn prop_win_rate_in_unit_interval(trades in prop::collection::vec(arb_trade(), 0..40)) {
        let stats = compute_stats(&trades);
        prop_assert!(stats.win_rate >= Decimal::ZERO);
        prop_assert!(stats.win_rate <= Decimal::ONE);

        let all_wins = stats.total_trades > 0 && stats.winning_trades == stats.total_trades;
        prop_assert_eq!(stats.win_rate == Decimal::ONE, all_wins);
    }

    #[test]
    fn prop_drawdown_non_negative(trades in prop::collection::vec(arb_trade(), 0..40)) {
        prop_assert!(max_drawdown(&trades) >= Decimal::ZERO);
    }

    #[test]
    fn prop_drawdown_zero_for_non_decreasing_equity(
        cents in prop::collection::vec(0i64..10_000, 0..30)
    ) {
        let trades: Vec<Trade> = cents
            .iter()
            .enumerate()
            .map(|(i, c)| Trade {
                id: i.to_string(),
                symbol: "TEST".to_string(),
                side: TradeSide::Long,
                status: TradeStatus::Closed,
                entry_date: base_date() + Duration::days(i as i64),
                exit_date: None,
                entry_price: dec!(1),
                exit_price: None,
                quantity: dec!(1),
                fees: Decimal::ZERO,
                strategy: "A".to_string(),
                notes: String::new(),
                pnl: Some(Decimal::new(*c, 2)),
            })
            .collect();

        prop_assert_eq!(max_drawdown(&trades), Decimal::ZERO);
    }

    #[test]
    fn prop_curve_matches_stats(trades in prop::collection::vec(arb_trade(), 0..40)) {
        let stats = compute_stats(&trades);
        let curve = build_equity_curve(&trades);

        if stats.total_trades == 0 {
            prop_assert!(curve.is_empty());
        } else {
            prop_assert_eq!(curve.len(), stats.total_trades + 1);
            prop_assert_eq!(curve.last().map(|p| p.equity), Some(stats.net_pnl));
        }
    }

    #[test]
    fn prop_strategy_totals_sum_all_pnl(trades in prop::collection::vec(arb_trade(), 0..40)) {
        let totals = aggregate_by_strategy(&trades);
        let expected: Decimal = trades.iter().filter_map(|t| t.pnl).sum();
        let actual: Decimal = totals.values().copied().sum();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_idempotent(trades in prop::collection::vec(arb_trade(), 0..40)) {
        let snapshot = trades.clone();

        let stats: TradeStats = compute_stats(&trades);
        prop_assert_eq!(&stats, &compute_stats(&trades));
        prop_assert_eq!(build_equity_curve(&trades), build_equity_curve(&trades));
        prop_assert_eq!(aggregate_by_strategy(&trades), aggregate_by_strategy(&trades));
        prop_assert_eq!(&trades, &snapshot);
    }
}
