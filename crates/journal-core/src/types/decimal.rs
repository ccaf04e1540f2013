//! 정밀한 금액 계산을 위한 Decimal 유틸리티.
//!
//! 이 모듈은 손익 계산에 필요한 정밀 소수점 타입 및 표시용 유틸리티를 제공합니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 호가 가격 타입.
pub type Price = Decimal;

/// 거래 수량 타입.
pub type Quantity = Decimal;

/// 실현 손익 타입 (호가 통화 단위).
pub type Pnl = Decimal;

/// 비율 타입 (0.01 = 1%).
pub type Ratio = Decimal;

/// Decimal 표시를 위한 확장 트레이트.
pub trait DecimalExt {
    /// 비율을 퍼센트 문자열로 변환합니다 (예: 0.525 → "52.50%").
    fn to_percentage_string(&self) -> String;

    /// 부호가 붙은 금액 문자열로 변환합니다 (예: "+12.50", "-3.00").
    fn to_signed_string(&self) -> String;

    /// 지정된 소수점 자릿수로 반올림합니다 (0.5는 0에서 먼 쪽으로).
    fn round_half_up(&self, dp: u32) -> Decimal;
}

impl DecimalExt for Decimal {
    fn to_percentage_string(&self) -> String {
        let pct = (*self * Decimal::ONE_HUNDRED).round_half_up(2);
        format!("{:.2}%", pct)
    }

    fn to_signed_string(&self) -> String {
        let rounded = self.round_half_up(2);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("{:.2}", rounded)
        } else {
            format!("+{:.2}", rounded.abs())
        }
    }

    fn round_half_up(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }
}
