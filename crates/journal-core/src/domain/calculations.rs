//! 매매 손익 계산 공통 로직.
//!
//! 거래 입력과 분석에서 공유하는 P&L 계산 함수를 제공합니다.
//! 계산은 모두 overflow를 검사하며, 범위를 벗어나면 `InvalidTradeRecord`를 반환합니다.

use rust_decimal::Decimal;

use super::trade::TradeSide;
use crate::error::{JournalError, JournalResult};
use crate::types::{Pnl, Price, Quantity};

/// 거래 1건 실현 손익의 절댓값 상한 (1e20).
///
/// 상한 이내의 손익은 수억 건을 누적해도 Decimal 범위(약 7.9e28)를 넘지 않습니다.
pub const MAX_ABS_PNL: Decimal = Decimal::from_parts(0x6310_0000, 0x6BC7_5E2D, 0x5, false, 0);

/// 수수료 차감 전 손익 계산.
///
/// 진입가와 청산가의 차이에 수량과 방향 부호를 곱합니다.
///
/// # Arguments
///
/// * `entry_price` - 진입 가격
/// * `exit_price` - 청산 가격
/// * `quantity` - 거래 수량
/// * `side` - 포지션 방향 (LONG=+1, SHORT=-1)
///
/// # Errors
///
/// 중간 계산이 Decimal 범위를 넘으면 `InvalidTradeRecord`를 반환합니다.
///
/// # Examples
///
/// ```
/// use journal_core::{gross_pnl, TradeSide};
/// use rust_decimal_macros::dec;
///
/// // 롱 포지션: 100에 진입 → 110에 청산, 수량 10
/// assert_eq!(gross_pnl(dec!(100), dec!(110), dec!(10), TradeSide::Long).unwrap(), dec!(100));
///
/// // 숏 포지션: 110에 진입 → 100에 청산, 수량 10
/// assert_eq!(gross_pnl(dec!(110), dec!(100), dec!(10), TradeSide::Short).unwrap(), dec!(100));
/// ```
pub fn gross_pnl(
    entry_price: Price,
    exit_price: Price,
    quantity: Quantity,
    side: TradeSide,
) -> JournalResult<Pnl> {
    exit_price
        .checked_sub(entry_price)
        .and_then(|diff| diff.checked_mul(quantity))
        .and_then(|gross| gross.checked_mul(side.multiplier()))
        .ok_or_else(pnl_out_of_range)
}

/// 수수료 차감 후 실현 손익 계산.
///
/// `(청산가 - 진입가) × 수량 × 방향 - 수수료`
///
/// 결과는 [`ensure_pnl_in_range`]로 상한을 검사합니다.
pub fn realized_pnl(
    entry_price: Price,
    exit_price: Price,
    quantity: Quantity,
    side: TradeSide,
    fees: Decimal,
) -> JournalResult<Pnl> {
    let net = gross_pnl(entry_price, exit_price, quantity, side)?
        .checked_sub(fees)
        .ok_or_else(pnl_out_of_range)?;

    ensure_pnl_in_range(net)
}

/// 손익이 [`MAX_ABS_PNL`] 이내인지 검사합니다.
///
/// 파일에서 읽은 거래처럼 입력 검증을 거치지 않은 손익에도 사용합니다.
pub fn ensure_pnl_in_range(pnl: Pnl) -> JournalResult<Pnl> {
    if pnl.abs() > MAX_ABS_PNL {
        return Err(pnl_out_of_range());
    }
    Ok(pnl)
}

fn pnl_out_of_range() -> JournalError {
    JournalError::InvalidTradeRecord("pnl out of range".to_string())
}
