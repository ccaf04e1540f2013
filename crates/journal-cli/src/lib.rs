//! 매매일지 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - JSON 파일 기반 매매일지 저장소
//! - 거래 추가/수정/삭제/조회 명령
//! - 통계, 자산 곡선, 전략별 손익 리포트
//! - AI 코칭 요청 미리보기

pub mod commands;
pub mod store;

pub use store::JournalStore;
