//! AI 코칭 요청 미리보기.
//!
//! 외부 서비스로 보낼 요청 본문을 만들어 출력합니다. 네트워크 호출은 하지 않습니다.

use anyhow::{Context, Result};
use journal_analytics::CoachingRequest;
use journal_core::{CoachingConfig, Trade};
use tracing::info;

/// 코칭 요청을 JSON 문자열로 생성합니다.
pub fn coaching_request_json(trades: &[Trade], config: &CoachingConfig) -> Result<String> {
    let request = CoachingRequest::from_trades(trades, config)
        .context("Failed to build coaching request")?;

    info!(model = %request.model, trades = trades.len(), "Coaching request prepared");

    serde_json::to_string_pretty(&request).context("Failed to serialize to JSON")
}
