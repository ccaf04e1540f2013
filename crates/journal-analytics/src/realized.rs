//! 통계 대상 거래 선별.

use journal_core::TradeInfo;

/// 통계 대상(청산 완료 + 손익 확정) 거래를 진입일 오름차순으로 반환합니다.
///
/// 정렬은 안정 정렬이므로 진입일이 같은 거래는 입력 순서를 유지합니다.
pub fn realized_by_entry_date<T: TradeInfo>(trades: &[T]) -> Vec<&T> {
    let mut realized: Vec<&T> = trades.iter().filter(|t| t.is_realized()).collect();
    realized.sort_by_key(|t| t.entry_date());
    realized
}
