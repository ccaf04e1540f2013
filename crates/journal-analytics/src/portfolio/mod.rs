//! 포트폴리오 분석 모듈
//!
//! 누적 실현 손익을 차트로 그리기 위한 데이터를 제공합니다.
//!
//! # 사용 예시
//!
//! ```rust
//! use journal_analytics::portfolio::build_equity_curve;
//! use journal_core::Trade;
//!
//! let trades: Vec<Trade> = Vec::new();
//! let curve = build_equity_curve(&trades);
//! assert!(curve.is_empty());
//! ```

pub mod equity_curve;

pub use equity_curve::*;
