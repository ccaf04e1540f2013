//! # Journal Core
//!
//! 매매일지의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 매매일지 전반에서 사용되는 기본 타입을 제공합니다:
//! - 거래 기록 및 입력 검증
//! - 손익 계산
//! - 거래 통계 값 객체
//! - 매매일지 컬렉션
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
