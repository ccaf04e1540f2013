//! 매매일지 성과 분석 엔진.
//!
//! 이 크레이트는 거래 목록을 받아 새로 할당된 파생 값을 반환하는
//! 순수 함수들을 제공합니다:
//! - 성과 통계 (승률, Profit Factor, 최대 낙폭 등)
//! - 자산 곡선 (누적 실현 손익 시계열)
//! - 전략별 손익 집계
//! - AI 코칭 요청 경계 (요청 생성 + 제공자 trait)
//!
//! 모든 계산은 입력 전체로부터 매번 새로 수행되며 내부 상태가 없습니다.
//!
//! # Re-exports
//!
//! - [`performance`]: 통계 계산 ([`compute_stats`], [`max_drawdown`])
//! - [`portfolio`]: 자산 곡선 ([`build_equity_curve`], [`ChartData`])
//! - [`strategy`]: 전략별 집계 ([`aggregate_by_strategy`])
//! - [`coaching`]: AI 코칭 요청 ([`CoachingRequest`], [`CoachingProvider`])

pub mod coaching;
pub mod performance;
pub mod portfolio;
pub mod realized;
pub mod strategy;

// Performance 모듈 re-exports
pub use performance::stats::{compute_stats, max_drawdown};

// Portfolio 모듈 re-exports
pub use portfolio::equity_curve::{build_equity_curve, ChartData, INITIAL_POINT_LABEL};

// Strategy 모듈 re-exports
pub use strategy::{aggregate_by_strategy, StrategyPnl};

// Coaching 모듈 re-exports
pub use coaching::{
    request_coaching, CoachingError, CoachingProvider, CoachingRequest, TradeSummary,
    EMPTY_ANALYSIS_FALLBACK,
};

pub use realized::realized_by_entry_date;
