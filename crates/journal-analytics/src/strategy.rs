//! 전략별 손익 집계.
//!
//! 대시보드의 전략 타일에 쓰이는 집계입니다. 통계와 달리 **모든** 거래를
//! 대상으로 하며, 손익이 없는 거래는 0으로 더합니다.

use indexmap::IndexMap;
use journal_core::{Pnl, TradeInfo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 전략 라벨별 손익 합계를 계산합니다.
///
/// 라벨은 대소문자를 구분하며 정규화하지 않습니다. 결과 순서는
/// 입력에서 라벨이 처음 등장한 순서를 따릅니다.
pub fn aggregate_by_strategy<T: TradeInfo>(trades: &[T]) -> IndexMap<String, Pnl> {
    let mut totals: IndexMap<String, Pnl> = IndexMap::new();

    for trade in trades {
        *totals
            .entry(trade.strategy().to_string())
            .or_insert(Decimal::ZERO) += trade.pnl().unwrap_or_default();
    }

    totals
}

/// 전략별 손익 요약 (표시용).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPnl {
    /// 전략 라벨
    pub strategy: String,
    /// 손익 합계 (미실현은 0)
    pub pnl: Pnl,
    /// 해당 전략의 거래 수 (미청산 포함)
    pub trade_count: usize,
}

impl StrategyPnl {
    /// 전략별 요약 목록을 생성합니다. 순서는 [`aggregate_by_strategy`]와 같습니다.
    pub fn from_trades<T: TradeInfo>(trades: &[T]) -> Vec<StrategyPnl> {
        let mut summaries: IndexMap<&str, StrategyPnl> = IndexMap::new();

        for trade in trades {
            let entry = summaries
                .entry(trade.strategy())
                .or_insert_with(|| StrategyPnl {
                    strategy: trade.strategy().to_string(),
                    pnl: Decimal::ZERO,
                    trade_count: 0,
                });
            entry.pnl += trade.pnl().unwrap_or_default();
            entry.trade_count += 1;
        }

        summaries.into_values().collect()
    }

    /// 손익이 0 이상인지 확인합니다.
    pub fn is_profitable(&self) -> bool {
        self.pnl >= Decimal::ZERO
    }
}
