pub mod announcements;
pub mod common;
pub mod teachers;

pub use common::{ApiResponse, ErrorCode, MessageResponse};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
