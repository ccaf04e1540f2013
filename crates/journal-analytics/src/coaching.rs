//! AI 코칭 요청 경계.
//!
//! 거래 기록을 외부 텍스트 생성 서비스에 보낼 요청으로 변환하고,
//! 서비스 호출은 [`CoachingProvider`] trait 뒤에 둡니다.
//! 실제 HTTP 호출 구현은 이 크레이트에 포함되지 않습니다.
//!
//! 호출은 1회성이며 실패할 수 있습니다. 취소는 future를 drop하면 되고,
//! 어떤 결과든 통계 계산에는 영향을 주지 않습니다.

use async_trait::async_trait;
use journal_core::{CoachingConfig, Pnl, Trade, TradeSide};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// 응답이 비어 있을 때 대신 반환하는 문구.
pub const EMPTY_ANALYSIS_FALLBACK: &str = "No analysis generated.";

/// 코칭 요청 에러.
#[derive(Debug, Error)]
pub enum CoachingError {
    /// 분석할 거래가 없음
    #[error("분석할 거래가 없습니다")]
    NoTrades,

    /// 요청 직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 외부 서비스 실패
    #[error("코칭 서비스 에러 ({provider}): {message}")]
    Provider { provider: String, message: String },
}

impl From<serde_json::Error> for CoachingError {
    fn from(err: serde_json::Error) -> Self {
        CoachingError::Serialization(err.to_string())
    }
}

/// 코치에게 전달되는 거래 요약.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnl: Option<Pnl>,
    pub strategy: String,
    pub side: TradeSide,
    pub notes: String,
}

impl From<&Trade> for TradeSummary {
    fn from(trade: &Trade) -> Self {
        Self {
            symbol: trade.symbol.clone(),
            pnl: trade.pnl,
            strategy: trade.strategy.clone(),
            side: trade.side,
            notes: trade.notes.clone(),
        }
    }
}

/// 텍스트 생성 서비스 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingRequest {
    /// 모델 이름
    pub model: String,
    /// 시스템 지시문 (코치 페르소나)
    pub system_instruction: String,
    /// 샘플링 온도
    pub temperature: f32,
    /// 사용자 프롬프트 (거래 이력 JSON 포함)
    pub contents: String,
}

impl CoachingRequest {
    /// 전체 거래 기록으로 코칭 요청을 생성합니다.
    ///
    /// 미청산 거래도 포함됩니다 (손익 필드만 생략).
    ///
    /// # Errors
    ///
    /// 거래가 없으면 `NoTrades`를 반환합니다.
    pub fn from_trades(trades: &[Trade], config: &CoachingConfig) -> Result<Self, CoachingError> {
        if trades.is_empty() {
            return Err(CoachingError::NoTrades);
        }

        let summaries: Vec<TradeSummary> = trades.iter().map(TradeSummary::from).collect();
        let history = serde_json::to_string_pretty(&summaries)?;

        Ok(Self {
            model: config.model.clone(),
            system_instruction: config.system_instruction.clone(),
            temperature: config.temperature,
            contents: build_prompt(&history),
        })
    }
}

fn build_prompt(history: &str) -> String {
    format!(
        "Analyze these trades from my trading journal. Identify strengths, weaknesses, \
         psychological patterns, and suggestions for strategy improvement. \
         Focus on risk management and consistent patterns.\n\
         \n\
         Trade History:\n\
         {history}\n\
         \n\
         Provide the response in a structured Markdown format with sections for:\n\
         1. Performance Summary\n\
         2. Strategy Effectiveness\n\
         3. Risk Management Review\n\
         4. Psychological Insights (based on notes)\n\
         5. Actionable Recommendations"
    )
}

/// 외부 텍스트 생성 서비스.
#[async_trait]
pub trait CoachingProvider: Send + Sync {
    /// 제공자 이름 (로그/에러 표시용).
    fn name(&self) -> &str;

    /// 요청을 보내고 Markdown 본문을 받습니다.
    async fn generate(&self, request: &CoachingRequest) -> Result<String, CoachingError>;
}

/// 거래 기록에 대한 코칭 분석을 요청합니다.
///
/// 빈 응답은 [`EMPTY_ANALYSIS_FALLBACK`]으로 대체합니다.
/// 실패는 그대로 호출자에게 반환됩니다.
pub async fn request_coaching(
    provider: &dyn CoachingProvider,
    trades: &[Trade],
    config: &CoachingConfig,
) -> Result<String, CoachingError> {
    let request = CoachingRequest::from_trades(trades, config)?;

    info!(
        provider = provider.name(),
        model = %request.model,
        trades = trades.len(),
        "Requesting coaching analysis"
    );

    let text = provider.generate(&request).await.inspect_err(|e| {
        warn!(provider = provider.name(), error = %e, "Coaching analysis failed");
    })?;

    if text.trim().is_empty() {
        return Ok(EMPTY_ANALYSIS_FALLBACK.to_string());
    }

    Ok(text)
}
