//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 우선순위: 기본값 < 설정 파일 < 환경 변수 (`JOURNAL__` 접두사).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 환경 변수 접두사.
pub const ENV_PREFIX: &str = "JOURNAL";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 매매일지 저장 설정
    #[serde(default)]
    pub journal: JournalConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// AI 코칭 요청 설정
    #[serde(default)]
    pub coaching: CoachingConfig,
}

/// 매매일지 저장 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JournalConfig {
    /// 거래 목록 JSON 파일 경로
    pub data_path: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/trades.json"),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// AI 코칭 요청 설정.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CoachingConfig {
    /// 모델 이름
    pub model: String,
    /// 시스템 지시문
    pub system_instruction: String,
    /// 샘플링 온도
    pub temperature: f32,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-pro-preview".to_string(),
            system_instruction: "You are a world-class trading performance coach and analyst. \
                Your tone is objective, professional, and supportive."
                .to_string(),
            temperature: 0.7,
        }
    }
}

impl AppConfig {
    /// 설정 파일(선택)과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let defaults = AppConfig::default();

        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default(
                "journal.data_path",
                defaults.journal.data_path.to_string_lossy().to_string(),
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .set_default("coaching.model", defaults.coaching.model)?
            .set_default(
                "coaching.system_instruction",
                defaults.coaching.system_instruction,
            )?
            .set_default("coaching.temperature", f64::from(defaults.coaching.temperature))?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
