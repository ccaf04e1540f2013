//! 거래 기록.
//!
//! 이 모듈은 매매일지의 거래 관련 타입을 정의합니다:
//! - `Trade` - 검증된 개별 거래 기록
//! - `TradeDraft` - 검증 전 거래 입력
//! - `TradeInfo` - 분석에 필요한 읽기 전용 인터페이스

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

use super::calculations::realized_pnl;
use crate::error::{JournalError, JournalResult};
use crate::types::{Pnl, Price, Quantity};

/// 새 거래 입력의 기본 전략 이름.
pub const DEFAULT_STRATEGY: &str = "Breakout";

/// 거래 날짜 형식 (ISO 8601).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 포지션 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    /// 롱 (가격 상승 시 이익)
    Long,
    /// 숏 (가격 하락 시 이익)
    Short,
}

impl TradeSide {
    /// 손익 부호 (롱 = +1, 숏 = -1).
    pub fn multiplier(&self) -> Decimal {
        match self {
            TradeSide::Long => Decimal::ONE,
            TradeSide::Short => Decimal::NEGATIVE_ONE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Long => "LONG",
            TradeSide::Short => "SHORT",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeSide {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LONG" => Ok(TradeSide::Long),
            "SHORT" => Ok(TradeSide::Short),
            _ => Err(JournalError::InvalidInput(format!(
                "Unknown trade side: {}. Use: LONG, SHORT",
                s
            ))),
        }
    }
}

/// 거래 생명주기 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    /// 보유 중
    Open,
    /// 청산 완료
    Closed,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Open => "OPEN",
            TradeStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeStatus {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OPEN" => Ok(TradeStatus::Open),
            "CLOSED" => Ok(TradeStatus::Closed),
            _ => Err(JournalError::InvalidInput(format!(
                "Unknown trade status: {}. Use: OPEN, CLOSED",
                s
            ))),
        }
    }
}

/// 매매일지에 기록된 단일 거래.
///
/// 저장 형식은 camelCase 키(`entryDate`, `exitPrice` 등)를 사용하며,
/// 값이 없는 선택 필드는 직렬화하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// 거래 ID (생성 시 부여, 변경 불가)
    pub id: String,
    /// 종목 심볼 (대문자)
    pub symbol: String,
    /// 포지션 방향
    pub side: TradeSide,
    /// 상태
    pub status: TradeStatus,
    /// 진입일
    pub entry_date: NaiveDate,
    /// 청산일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<NaiveDate>,
    /// 진입 가격
    pub entry_price: Price,
    /// 청산 가격
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<Price>,
    /// 수량
    pub quantity: Quantity,
    /// 수수료 합계
    #[serde(default)]
    pub fees: Decimal,
    /// 전략 라벨
    #[serde(default)]
    pub strategy: String,
    /// 메모
    #[serde(default)]
    pub notes: String,
    /// 실현 손익 (`None` = 아직 실현되지 않음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnl: Option<Pnl>,
}

/// 거래 정보를 제공하는 trait.
///
/// 통계, 자산 곡선, 전략별 집계는 이 인터페이스만 사용하며
/// 거래를 변경하지 않습니다.
pub trait TradeInfo {
    /// 종목 심볼.
    fn symbol(&self) -> &str;

    /// 거래 상태.
    fn status(&self) -> TradeStatus;

    /// 실현 손익.
    ///
    /// # Returns
    ///
    /// - `Some(pnl)`: 실현된 손익
    /// - `None`: 미실현 (0으로 실현된 것과 구분됨)
    fn pnl(&self) -> Option<Pnl>;

    /// 진입일 (시간순 정렬 기준).
    fn entry_date(&self) -> NaiveDate;

    /// 전략 라벨.
    fn strategy(&self) -> &str;

    /// 통계 대상 여부: 청산 완료이면서 손익이 있는 거래.
    fn is_realized(&self) -> bool {
        self.status() == TradeStatus::Closed && self.pnl().is_some()
    }
}

impl TradeInfo for Trade {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn status(&self) -> TradeStatus {
        self.status
    }

    fn pnl(&self) -> Option<Pnl> {
        self.pnl
    }

    fn entry_date(&self) -> NaiveDate {
        self.entry_date
    }

    fn strategy(&self) -> &str {
        &self.strategy
    }
}

impl Trade {
    /// 새 거래 입력을 시작합니다.
    pub fn draft(
        symbol: impl Into<String>,
        side: TradeSide,
        entry_date: impl Into<String>,
        entry_price: Price,
        quantity: Quantity,
    ) -> TradeDraft {
        TradeDraft::new(symbol, side, entry_date, entry_price, quantity)
    }

    /// 이익 거래인지 확인합니다.
    pub fn is_win(&self) -> bool {
        self.pnl.is_some_and(|pnl| pnl > Decimal::ZERO)
    }

    /// 손실 거래인지 확인합니다.
    pub fn is_loss(&self) -> bool {
        self.pnl.is_some_and(|pnl| pnl < Decimal::ZERO)
    }
}

/// 검증 전 거래 입력.
///
/// 입력 폼에 해당하며, [`TradeDraft::into_trade`]에서 검증과
/// 손익 계산을 거쳐 [`Trade`]가 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDraft {
    pub symbol: String,
    pub side: TradeSide,
    pub status: TradeStatus,
    /// 진입일 (YYYY-MM-DD)
    pub entry_date: String,
    /// 청산일 (YYYY-MM-DD)
    #[serde(default)]
    pub exit_date: Option<String>,
    pub entry_price: Price,
    #[serde(default)]
    pub exit_price: Option<Price>,
    pub quantity: Quantity,
    #[serde(default)]
    pub fees: Decimal,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub notes: String,
}

impl TradeDraft {
    /// 새 거래 입력을 생성합니다. 상태는 청산(CLOSED), 전략은 기본값입니다.
    pub fn new(
        symbol: impl Into<String>,
        side: TradeSide,
        entry_date: impl Into<String>,
        entry_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            status: TradeStatus::Closed,
            entry_date: entry_date.into(),
            exit_date: None,
            entry_price,
            exit_price: None,
            quantity,
            fees: Decimal::ZERO,
            strategy: DEFAULT_STRATEGY.to_string(),
            notes: String::new(),
        }
    }

    /// 상태를 설정합니다.
    pub fn with_status(mut self, status: TradeStatus) -> Self {
        self.status = status;
        self
    }

    /// 청산 가격을 설정합니다.
    pub fn with_exit_price(mut self, exit_price: Price) -> Self {
        self.exit_price = Some(exit_price);
        self
    }

    /// 청산일을 설정합니다.
    pub fn with_exit_date(mut self, exit_date: impl Into<String>) -> Self {
        self.exit_date = Some(exit_date.into());
        self
    }

    /// 수수료를 설정합니다.
    pub fn with_fees(mut self, fees: Decimal) -> Self {
        self.fees = fees;
        self
    }

    /// 전략 라벨을 설정합니다.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// 메모를 설정합니다.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// 새 ID를 부여하여 거래를 생성합니다.
    pub fn into_trade(self) -> JournalResult<Trade> {
        let id = Uuid::new_v4().simple().to_string();
        self.into_trade_with_id(id)
    }

    /// 기존 ID를 유지하여 거래를 생성합니다 (수정 시 사용).
    ///
    /// # Errors
    ///
    /// 필수 값이 비었거나 범위를 벗어나면 `InvalidTradeRecord`를 반환합니다.
    pub fn into_trade_with_id(self, id: impl Into<String>) -> JournalResult<Trade> {
        let id = id.into();
        self.validate(&id).inspect_err(|e| {
            warn!(trade_id = %id, symbol = %self.symbol, error = %e, "Rejected trade record");
        })?;

        let entry_date = parse_date("entryDate", &self.entry_date)?;
        let exit_date = match self.exit_date.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(parse_date("exitDate", s)?),
            _ => None,
        };

        let pnl = self.realized_pnl().inspect_err(|e| {
            warn!(trade_id = %id, symbol = %self.symbol, error = %e, "Rejected trade record");
        })?;

        Ok(Trade {
            id,
            symbol: self.symbol.trim().to_uppercase(),
            side: self.side,
            status: self.status,
            entry_date,
            exit_date,
            entry_price: self.entry_price,
            exit_price: self.exit_price,
            quantity: self.quantity,
            fees: self.fees,
            strategy: self.strategy,
            notes: self.notes,
            pnl,
        })
    }

    /// 현재 입력으로 계산되는 실현 손익.
    ///
    /// 청산 상태이고 진입가, 청산가, 수량이 모두 0이 아닐 때만 계산됩니다.
    ///
    /// # Errors
    ///
    /// 계산이 overflow되거나 [`MAX_ABS_PNL`](super::calculations::MAX_ABS_PNL)을
    /// 넘으면 `InvalidTradeRecord`를 반환합니다.
    pub fn realized_pnl(&self) -> JournalResult<Option<Pnl>> {
        if self.status != TradeStatus::Closed {
            return Ok(None);
        }

        let Some(exit_price) = self.exit_price else {
            return Ok(None);
        };
        if self.entry_price.is_zero() || exit_price.is_zero() || self.quantity.is_zero() {
            return Ok(None);
        }

        realized_pnl(
            self.entry_price,
            exit_price,
            self.quantity,
            self.side,
            self.fees,
        )
        .map(Some)
    }

    fn validate(&self, id: &str) -> JournalResult<()> {
        if id.trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if self.symbol.trim().is_empty() {
            return Err(invalid("symbol must not be empty"));
        }
        if self.entry_price <= Decimal::ZERO {
            return Err(invalid(format!(
                "entryPrice must be positive, got {}",
                self.entry_price
            )));
        }
        if let Some(exit_price) = self.exit_price {
            if exit_price <= Decimal::ZERO {
                return Err(invalid(format!(
                    "exitPrice must be positive, got {}",
                    exit_price
                )));
            }
        }
        if self.quantity < Decimal::ZERO {
            return Err(invalid(format!(
                "quantity must not be negative, got {}",
                self.quantity
            )));
        }
        if self.fees < Decimal::ZERO {
            return Err(invalid(format!(
                "fees must not be negative, got {}",
                self.fees
            )));
        }
        Ok(())
    }
}

impl From<&Trade> for TradeDraft {
    fn from(trade: &Trade) -> Self {
        Self {
            symbol: trade.symbol.clone(),
            side: trade.side,
            status: trade.status,
            entry_date: trade.entry_date.format(DATE_FORMAT).to_string(),
            exit_date: trade
                .exit_date
                .map(|d| d.format(DATE_FORMAT).to_string()),
            entry_price: trade.entry_price,
            exit_price: trade.exit_price,
            quantity: trade.quantity,
            fees: trade.fees,
            strategy: trade.strategy.clone(),
            notes: trade.notes.clone(),
        }
    }
}

fn invalid(reason: impl Into<String>) -> JournalError {
    JournalError::InvalidTradeRecord(reason.into())
}

fn parse_date(field: &str, value: &str) -> JournalResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        invalid(format!(
            "{} must be an ISO 8601 date (YYYY-MM-DD), got '{}'",
            field, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculations::MAX_ABS_PNL;
    use rust_decimal_macros::dec;

    fn closed_long() -> TradeDraft {
        Trade::draft("btcusdt", TradeSide::Long, "2024-03-01", dec!(50000), dec!(0.5))
            .with_exit_price(dec!(51000))
            .with_exit_date("2024-03-04")
            .with_fees(dec!(12.5))
    }

    #[test]
    fn test_closed_long_computes_pnl() {
        let trade = closed_long().into_trade().unwrap();

        assert_eq!(trade.symbol, "BTCUSDT");
        assert_eq!(trade.pnl, Some(dec!(487.5)));
        assert_eq!(
            trade.exit_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
        );
        assert!(trade.is_realized());
        assert!(trade.is_win());
    }

    #[test]
    fn test_closed_short_computes_pnl() {
        let trade = Trade::draft("es", TradeSide::Short, "2024-01-10", dec!(4800), dec!(2))
            .with_exit_price(dec!(4825))
            .with_fees(dec!(4))
            .into_trade()
            .unwrap();

        // (4825 - 4800) * 2 * -1 - 4 = -54
        assert_eq!(trade.pnl, Some(dec!(-54)));
        assert!(trade.is_loss());
    }

    #[test]
    fn test_open_trade_has_no_pnl() {
        let trade = closed_long()
            .with_status(TradeStatus::Open)
            .into_trade()
            .unwrap();

        assert_eq!(trade.pnl, None);
        assert!(!trade.is_realized());
    }

    #[test]
    fn test_closed_without_exit_price_has_no_pnl() {
        let trade = Trade::draft("AAPL", TradeSide::Long, "2024-02-01", dec!(180), dec!(10))
            .into_trade()
            .unwrap();

        assert_eq!(trade.status, TradeStatus::Closed);
        assert_eq!(trade.pnl, None);
        assert!(!trade.is_realized());
    }

    #[test]
    fn test_zero_quantity_has_no_pnl() {
        let trade = Trade::draft("AAPL", TradeSide::Long, "2024-02-01", dec!(180), dec!(0))
            .with_exit_price(dec!(190))
            .into_trade()
            .unwrap();

        assert_eq!(trade.pnl, None);
    }

    #[test]
    fn test_rejects_blank_symbol() {
        let err = Trade::draft("  ", TradeSide::Long, "2024-02-01", dec!(1), dec!(1))
            .into_trade()
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidTradeRecord(_)));
    }

    #[test]
    fn test_rejects_bad_dates() {
        let err = Trade::draft("AAPL", TradeSide::Long, "02/01/2024", dec!(1), dec!(1))
            .into_trade()
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidTradeRecord(_)));

        let err = Trade::draft("AAPL", TradeSide::Long, "2024-02-01", dec!(1), dec!(1))
            .with_exit_date("tomorrow")
            .into_trade()
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidTradeRecord(_)));
    }

    #[test]
    fn test_blank_exit_date_is_absent() {
        let trade = Trade::draft("AAPL", TradeSide::Long, "2024-02-01", dec!(1), dec!(1))
            .with_exit_date("")
            .into_trade()
            .unwrap();
        assert_eq!(trade.exit_date, None);
    }

    #[test]
    fn test_rejects_out_of_range_numbers() {
        let cases = vec![
            Trade::draft("A", TradeSide::Long, "2024-02-01", dec!(0), dec!(1)),
            Trade::draft("A", TradeSide::Long, "2024-02-01", dec!(1), dec!(-1)),
            Trade::draft("A", TradeSide::Long, "2024-02-01", dec!(1), dec!(1)).with_fees(dec!(-0.01)),
            Trade::draft("A", TradeSide::Long, "2024-02-01", dec!(1), dec!(1)).with_exit_price(dec!(0)),
        ];

        for draft in cases {
            let err = draft.into_trade().unwrap_err();
            assert!(matches!(err, JournalError::InvalidTradeRecord(_)));
        }
    }

    #[test]
    fn test_overflowing_pnl_is_rejected() {
        let big = |v: &str| Decimal::from_scientific(v).unwrap();

        let result = Trade::draft("BIG", TradeSide::Long, "2024-01-01", big("1e20"), big("1e10"))
            .with_exit_price(big("2e20"))
            .into_trade();

        match result {
            Err(JournalError::InvalidTradeRecord(reason)) => assert_eq!(reason, "pnl out of range"),
            other => panic!("expected InvalidTradeRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_pnl_above_bound_is_rejected() {
        let big = |v: &str| Decimal::from_scientific(v).unwrap();

        // 5e28: Decimal로 표현되지만 두 건만 더해도 overflow
        let result = Trade::draft("BIG", TradeSide::Long, "2024-01-01", big("1e14"), big("5e14"))
            .with_exit_price(big("2e14"))
            .into_trade();
        assert!(matches!(result, Err(JournalError::InvalidTradeRecord(_))));

        // 상한 이내는 허용
        let trade = Trade::draft("BIG", TradeSide::Long, "2024-01-01", big("1e10"), big("1e10"))
            .with_exit_price(big("2e10"))
            .into_trade()
            .unwrap();
        assert_eq!(trade.pnl, Some(MAX_ABS_PNL));
    }

    #[test]
    fn test_open_trade_skips_pnl_bound() {
        let big = |v: &str| Decimal::from_scientific(v).unwrap();

        let trade = Trade::draft("BIG", TradeSide::Long, "2024-01-01", big("1e20"), big("1e10"))
            .with_exit_price(big("2e20"))
            .with_status(TradeStatus::Open)
            .into_trade()
            .unwrap();
        assert_eq!(trade.pnl, None);
    }

    #[test]
    fn test_edit_keeps_id() {
        let trade = closed_long().into_trade().unwrap();
        let edited = TradeDraft::from(&trade)
            .with_exit_price(dec!(52000))
            .into_trade_with_id(trade.id.clone())
            .unwrap();

        assert_eq!(edited.id, trade.id);
        // (52000 - 50000) * 0.5 - 12.5 = 987.5
        assert_eq!(edited.pnl, Some(dec!(987.5)));
    }

    #[test]
    fn test_side_and_status_parse() {
        assert_eq!("long".parse::<TradeSide>().unwrap(), TradeSide::Long);
        assert_eq!("SHORT".parse::<TradeSide>().unwrap(), TradeSide::Short);
        assert!("sideways".parse::<TradeSide>().is_err());
        assert_eq!("closed".parse::<TradeStatus>().unwrap(), TradeStatus::Closed);
        assert!("pending".parse::<TradeStatus>().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let trade = closed_long().into_trade_with_id("t1").unwrap();
        let json = serde_json::to_value(&trade).unwrap();

        assert_eq!(json["id"], "t1");
        assert_eq!(json["side"], "LONG");
        assert_eq!(json["status"], "CLOSED");
        assert_eq!(json["entryDate"], "2024-03-01");
        assert_eq!(json["exitDate"], "2024-03-04");
        assert!(json.get("pnl").is_some());
    }

    #[test]
    fn test_deserialize_numeric_record() {
        let json = r#"{
            "id": "abc123",
            "symbol": "TSLA",
            "side": "SHORT",
            "status": "OPEN",
            "entryDate": "2024-05-02",
            "entryPrice": 180.5,
            "quantity": 3,
            "fees": 0,
            "strategy": "Fade",
            "notes": ""
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.side, TradeSide::Short);
        assert_eq!(trade.entry_price, dec!(180.5));
        assert_eq!(trade.exit_price, None);
        assert_eq!(trade.pnl, None);
    }
}
