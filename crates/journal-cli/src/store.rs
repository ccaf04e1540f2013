//! 매매일지 JSON 파일 저장소.
//!
//! 매매일지 전체를 하나의 JSON 배열로 저장합니다. 저장은 임시 파일에
//! 쓴 뒤 이름을 바꾸므로, 쓰기 도중 실패해도 기존 파일은 유지됩니다.

use std::fs;
use std::path::{Path, PathBuf};

use journal_core::{ensure_pnl_in_range, Journal, JournalError, JournalResult};
use tracing::{debug, info};

/// 파일 기반 매매일지 저장소.
#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// 지정한 경로를 사용하는 저장소를 생성합니다.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 저장 파일 경로.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 매매일지를 불러옵니다.
    ///
    /// 파일이 없거나 비어 있으면 빈 매매일지를 반환합니다.
    /// 손익이 [`MAX_ABS_PNL`](journal_core::MAX_ABS_PNL)을 넘는 거래가 있으면
    /// `InvalidTradeRecord`로 거부합니다.
    pub fn load(&self) -> JournalResult<Journal> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Journal file not found, starting empty");
            return Ok(Journal::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;
        if content.trim().is_empty() {
            return Ok(Journal::new());
        }

        let journal: Journal = serde_json::from_str(&content)?;
        for trade in journal.trades() {
            if let Some(pnl) = trade.pnl {
                ensure_pnl_in_range(pnl).map_err(|_| {
                    JournalError::InvalidTradeRecord(format!("trade {}: pnl out of range", trade.id))
                })?;
            }
        }
        info!(path = %self.path.display(), trades = journal.len(), "Journal loaded");

        Ok(journal)
    }

    /// 매매일지를 저장합니다.
    pub fn save(&self, journal: &Journal) -> JournalResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
            }
        }

        let content = serde_json::to_string_pretty(journal)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, content).map_err(|e| self.storage_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.storage_error(e))?;

        info!(path = %self.path.display(), trades = journal.len(), "Journal saved");
        Ok(())
    }

    fn storage_error(&self, err: std::io::Error) -> JournalError {
        JournalError::Storage(format!("{}: {}", self.path.display(), err))
    }
}
