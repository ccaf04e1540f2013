//! 성과 분석 모듈
//!
//! 매매일지의 성과를 측정하기 위한 도구를 제공합니다.
//!
//! # 모듈 구성
//!
//! - [`stats`]: 통계 계산 (승률, Profit Factor, 최대 낙폭 등)

pub mod stats;

pub use stats::*;
