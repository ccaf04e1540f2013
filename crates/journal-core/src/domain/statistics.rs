//! 거래 통계 값 객체.
//!
//! 매매일지 대시보드가 표시하는 성과 지표를 담습니다.
//! 계산은 `journal-analytics`가 거래 목록 전체로부터 매번 새로 수행합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Pnl, Ratio};

/// 거래 통계 집계.
///
/// 모든 값은 청산 완료 + 손익 확정 거래만으로 계산됩니다.
/// 대상 거래가 없으면 모든 필드가 0인 [`Default`] 값입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStats {
    /// 통계 대상 거래 수
    pub total_trades: usize,
    /// 승률 (0 ~ 1)
    pub win_rate: Ratio,
    /// 순손익
    pub net_pnl: Pnl,
    /// 평균 수익 (수익 거래만)
    pub avg_win: Pnl,
    /// 평균 손실 (손실 거래만, 양수)
    pub avg_loss: Pnl,
    /// Profit Factor (총수익 / 총손실, 손실이 없으면 총수익)
    pub profit_factor: Decimal,
    /// 최대 낙폭 (누적 실현 손익 기준, 양수)
    pub max_drawdown: Pnl,
    /// 수익 거래 수
    pub winning_trades: usize,
    /// 손실 거래 수
    pub losing_trades: usize,
    /// 총 수익
    pub gross_win: Pnl,
    /// 총 손실 (양수)
    pub gross_loss: Pnl,
}

impl Default for TradeStats {
    fn default() -> Self {
        Self {
            total_trades: 0,
            win_rate: Decimal::ZERO,
            net_pnl: Decimal::ZERO,
            avg_win: Decimal::ZERO,
            avg_loss: Decimal::ZERO,
            profit_factor: Decimal::ZERO,
            max_drawdown: Decimal::ZERO,
            winning_trades: 0,
            losing_trades: 0,
            gross_win: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
        }
    }
}

impl TradeStats {
    /// 빈 통계 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 통계 대상 거래가 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.total_trades == 0
    }

    /// 평균 거래당 손익.
    pub fn avg_trade_pnl(&self) -> Pnl {
        if self.total_trades > 0 {
            self.net_pnl / Decimal::from(self.total_trades)
        } else {
            Decimal::ZERO
        }
    }

    /// 승률 (백분율, 예: 65.5 = 65.5%).
    pub fn win_rate_pct(&self) -> Decimal {
        self.win_rate * Decimal::ONE_HUNDRED
    }

    /// 손익이 0인 거래 수.
    pub fn breakeven_trades(&self) -> usize {
        self.total_trades - self.winning_trades - self.losing_trades
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_all_zero() {
        let stats = TradeStats::new();

        assert!(stats.is_empty());
        assert_eq!(stats.win_rate, Decimal::ZERO);
        assert_eq!(stats.profit_factor, Decimal::ZERO);
        assert_eq!(stats.max_drawdown, Decimal::ZERO);
        assert_eq!(stats.avg_trade_pnl(), Decimal::ZERO);
    }

    #[test]
    fn test_avg_trade_pnl() {
        let stats = TradeStats {
            total_trades: 5,
            net_pnl: dec!(250),
            ..Default::default()
        };

        assert_eq!(stats.avg_trade_pnl(), dec!(50));
    }

    #[test]
    fn test_win_rate_pct_and_breakeven() {
        let stats = TradeStats {
            total_trades: 4,
            winning_trades: 2,
            losing_trades: 1,
            win_rate: dec!(0.5),
            ..Default::default()
        };

        assert_eq!(stats.win_rate_pct(), dec!(50));
        assert_eq!(stats.breakeven_trades(), 1);
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(TradeStats::default()).unwrap();
        assert!(json.get("totalTrades").is_some());
        assert!(json.get("profitFactor").is_some());
        assert!(json.get("maxDrawdown").is_some());
    }
}
