//! 성과 통계 계산 모듈
//!
//! 거래 목록을 [`TradeStats`]로 축약합니다:
//! - 승률 (Win Rate): 수익 거래 비율
//! - 프로핏 팩터 (Profit Factor): 총 수익 / 총 손실
//! - 평균 수익 / 평균 손실
//! - 최대 낙폭 (Maximum Drawdown): 누적 실현 손익의 고점 대비 최대 하락폭
//!
//! 대상 거래가 없으면 에러가 아니라 모든 값이 0인 통계를 반환합니다.

use journal_core::{Pnl, TradeInfo, TradeStats};
use rust_decimal::Decimal;
use tracing::debug;

use crate::realized::realized_by_entry_date;

/// 거래 목록으로부터 통계를 계산합니다.
///
/// 청산 완료이면서 손익이 있는 거래만 대상입니다. 손익이 0인 거래는
/// 수익/손실 어느 쪽에도 속하지 않지만 거래 수와 순손익에는 포함됩니다.
///
/// Profit Factor는 손실이 없으면 총 수익 자체를 반환합니다.
///
/// 입력 거래의 손익은 [`MAX_ABS_PNL`](journal_core::MAX_ABS_PNL) 이내라고 가정합니다.
/// `TradeDraft`와 저장소 로드가 이 상한을 보장하므로 합계는 overflow되지 않습니다.
///
/// # Examples
///
/// ```
/// use journal_analytics::compute_stats;
/// use journal_core::{Trade, TradeSide};
/// use rust_decimal_macros::dec;
///
/// let trade = Trade::draft("AAPL", TradeSide::Long, "2024-01-02", dec!(100), dec!(1))
///     .with_exit_price(dec!(200))
///     .into_trade()
///     .unwrap();
///
/// let stats = compute_stats(&[trade]);
/// assert_eq!(stats.total_trades, 1);
/// assert_eq!(stats.profit_factor, dec!(100));
/// ```
pub fn compute_stats<T: TradeInfo>(trades: &[T]) -> TradeStats {
    let pnls: Vec<Pnl> = trades
        .iter()
        .filter(|t| t.is_realized())
        .filter_map(|t| t.pnl())
        .collect();

    if pnls.is_empty() {
        return TradeStats::default();
    }

    let mut stats = TradeStats::new();
    stats.total_trades = pnls.len();

    for pnl in &pnls {
        stats.net_pnl += *pnl;

        // 수익/손실 분류 (0은 어느 쪽도 아님)
        if *pnl > Decimal::ZERO {
            stats.winning_trades += 1;
            stats.gross_win += *pnl;
        } else if *pnl < Decimal::ZERO {
            stats.losing_trades += 1;
            stats.gross_loss += pnl.abs();
        }
    }

    stats.win_rate = Decimal::from(stats.winning_trades) / Decimal::from(stats.total_trades);

    if stats.winning_trades > 0 {
        stats.avg_win = stats.gross_win / Decimal::from(stats.winning_trades);
    }
    if stats.losing_trades > 0 {
        stats.avg_loss = stats.gross_loss / Decimal::from(stats.losing_trades);
    }

    // 손실이 없으면 총 수익으로 대체, 극소 손실로 몫이 범위를 넘으면 Decimal::MAX
    stats.profit_factor = if stats.gross_loss.is_zero() {
        stats.gross_win
    } else {
        stats
            .gross_win
            .checked_div(stats.gross_loss)
            .unwrap_or(Decimal::MAX)
    };

    stats.max_drawdown = max_drawdown(trades);

    debug!(
        total_trades = stats.total_trades,
        net_pnl = %stats.net_pnl,
        win_rate = %stats.win_rate,
        max_drawdown = %stats.max_drawdown,
        "Trade stats computed"
    );

    stats
}

/// 누적 실현 손익의 최대 낙폭을 계산합니다.
///
/// 대상 거래를 진입일 순(같은 날은 입력 순)으로 누적하면서
/// 고점 대비 하락폭의 최댓값을 구합니다. 누적 손익과 고점은 모두 0에서
/// 시작하므로 첫 거래부터 손실이면 그 손실이 낙폭이 됩니다.
///
/// # Returns
///
/// 0 이상의 낙폭 (하락이 없으면 0)
pub fn max_drawdown<T: TradeInfo>(trades: &[T]) -> Pnl {
    let mut running = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut max_dd = Decimal::ZERO;

    for trade in realized_by_entry_date(trades) {
        running += trade.pnl().unwrap_or_default();

        if running > peak {
            peak = running;
        } else {
            let drawdown = peak - running;
            if drawdown > max_dd {
                max_dd = drawdown;
            }
        }
    }

    max_dd
}
