//! 매매일지 컬렉션.
//!
//! 애플리케이션이 소유하는 단일 거래 목록입니다. 분석 함수는 이 목록을
//! 읽기만 하고, 변경은 항상 이 타입을 통해서만 이뤄집니다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::trade::Trade;
use crate::error::{JournalError, JournalResult};

/// 거래 기록 목록 (최신 입력이 앞쪽).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    trades: Vec<Trade>,
}

impl Journal {
    /// 빈 매매일지를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 거래 목록으로 매매일지를 생성합니다 (순서 유지).
    pub fn from_trades(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    /// 모든 거래를 반환합니다.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// ID로 거래를 조회합니다.
    pub fn get(&self, id: &str) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// 새 거래를 맨 앞에 추가합니다.
    pub fn add(&mut self, trade: Trade) {
        debug!(trade_id = %trade.id, symbol = %trade.symbol, "Trade added");
        self.trades.insert(0, trade);
    }

    /// 같은 ID의 거래가 있으면 제자리에서 교체하고, 없으면 추가합니다.
    ///
    /// # Returns
    ///
    /// 교체되었으면 `true`
    pub fn upsert(&mut self, trade: Trade) -> bool {
        match self.trades.iter_mut().find(|t| t.id == trade.id) {
            Some(existing) => {
                debug!(trade_id = %trade.id, "Trade updated");
                *existing = trade;
                true
            }
            None => {
                self.add(trade);
                false
            }
        }
    }

    /// 거래를 삭제합니다.
    ///
    /// # Errors
    ///
    /// 해당 ID가 없으면 `NotFound`를 반환합니다.
    pub fn remove(&mut self, id: &str) -> JournalResult<Trade> {
        let index = self
            .trades
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("trade {}", id)))?;

        debug!(trade_id = %id, "Trade removed");
        Ok(self.trades.remove(index))
    }

    /// 심볼 또는 전략에 검색어가 포함된 거래 (대소문자 무시).
    pub fn search(&self, term: &str) -> Vec<&Trade> {
        let needle = term.trim().to_lowercase();
        self.trades
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || t.symbol.to_lowercase().contains(&needle)
                    || t.strategy.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
