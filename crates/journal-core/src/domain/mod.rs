//! 매매일지 운영을 위한 도메인 모델.

mod calculations;
mod journal;
mod statistics;
mod trade;

pub use calculations::*;
pub use journal::*;
pub use statistics::*;
pub use trade::*;
