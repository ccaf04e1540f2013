//! 자산 곡선(Equity Curve) 데이터 모듈
//!
//! 누적 실현 손익을 시간순으로 나열하여 차트 데이터를 만듭니다.
//!
//! # 주요 기능
//!
//! - 진입일 순 누적 손익 계산
//! - 첫 거래 이전의 기준점(0) 추가
//!
//! 호출마다 입력 전체로부터 새로 계산하며, 증분 갱신은 하지 않습니다.

use journal_core::{Pnl, TradeInfo, DATE_FORMAT};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::realized::realized_by_entry_date;

/// 첫 번째 기준점의 날짜 라벨. 실제 날짜(YYYY-MM-DD)와 겹치지 않습니다.
pub const INITIAL_POINT_LABEL: &str = "Initial";

/// 자산 곡선의 단일 데이터 포인트.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// 진입일 (YYYY-MM-DD) 또는 [`INITIAL_POINT_LABEL`]
    pub date: String,
    /// 누적 실현 손익
    pub equity: Pnl,
    /// 해당 거래의 실현 손익
    pub pnl: Pnl,
}

impl ChartData {
    /// 거래 이전 기준점을 생성합니다.
    pub fn initial() -> Self {
        Self {
            date: INITIAL_POINT_LABEL.to_string(),
            equity: Decimal::ZERO,
            pnl: Decimal::ZERO,
        }
    }

    /// 기준점인지 확인합니다.
    pub fn is_initial(&self) -> bool {
        self.date == INITIAL_POINT_LABEL
    }
}

/// 거래 목록으로부터 자산 곡선을 생성합니다.
///
/// 통계 대상 거래를 진입일 순(같은 날은 입력 순)으로 누적합니다.
/// 대상 거래가 있으면 맨 앞에 기준점 `{Initial, 0, 0}`을 추가하고,
/// 없으면 빈 목록을 반환합니다.
///
/// # Examples
///
/// ```
/// use journal_analytics::{build_equity_curve, INITIAL_POINT_LABEL};
/// use journal_core::{Trade, TradeSide};
/// use rust_decimal_macros::dec;
///
/// let trade = Trade::draft("AAPL", TradeSide::Long, "2024-01-02", dec!(100), dec!(1))
///     .with_exit_price(dec!(150))
///     .into_trade()
///     .unwrap();
///
/// let curve = build_equity_curve(&[trade]);
/// assert_eq!(curve.len(), 2);
/// assert_eq!(curve[0].date, INITIAL_POINT_LABEL);
/// assert_eq!(curve[1].equity, dec!(50));
/// ```
pub fn build_equity_curve<T: TradeInfo>(trades: &[T]) -> Vec<ChartData> {
    let realized = realized_by_entry_date(trades);
    if realized.is_empty() {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(realized.len() + 1);
    points.push(ChartData::initial());

    let mut equity = Decimal::ZERO;
    for trade in realized {
        let pnl = trade.pnl().unwrap_or_default();
        equity += pnl;
        points.push(ChartData {
            date: trade.entry_date().format(DATE_FORMAT).to_string(),
            equity,
            pnl,
        });
    }

    debug!(points = points.len(), final_equity = %equity, "Equity curve built");

    points
}
