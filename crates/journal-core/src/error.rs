//! 매매일지의 에러 타입.
//!
//! 이 모듈은 매매일지 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 매매일지 에러.
#[derive(Debug, Error)]
pub enum JournalError {
    /// 잘못된 거래 기록 (필수 필드 누락, 범위 위반 등)
    #[error("잘못된 거래 기록: {0}")]
    InvalidTradeRecord(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 저장소 에러
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),
}

/// 매매일지 작업을 위한 Result 타입.
pub type JournalResult<T> = Result<T, JournalError>;

impl JournalError {
    /// 호출자의 잘못된 사용으로 인한 에러인지 확인합니다.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            JournalError::InvalidTradeRecord(_)
                | JournalError::InvalidInput(_)
                | JournalError::NotFound(_)
        )
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}

impl From<config::ConfigError> for JournalError {
    fn from(err: config::ConfigError) -> Self {
        JournalError::Config(err.to_string())
    }
}
