//! CLI 명령어 구현 모듈.

pub mod coach;
pub mod output;
pub mod report;
pub mod trades;

pub use output::OutputFormat;
