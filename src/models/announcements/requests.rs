use serde::Deserialize;
use ts_rs::TS;

// 创建公告请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "announcement.ts")]
pub struct CreateAnnouncementRequest {
    pub message: String,
    pub expiration_date: String,
    pub start_date: Option<String>,
}

// 更新公告请求
//
// 仅更新显式提供的字段，null 与缺省等价
#[derive(Debug, Clone, Default, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "announcement.ts")]
pub struct UpdateAnnouncementRequest {
    pub message: Option<String>,
    pub start_date: Option<String>,
    pub expiration_date: Option<String>,
}

impl UpdateAnnouncementRequest {
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.start_date.is_none() && self.expiration_date.is_none()
    }
}

// 调用方教师身份（来自查询参数）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "announcement.ts")]
pub struct TeacherIdentityQuery {
    pub teacher_username: Option<String>,
}

// 写入存储层的新公告
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub created_at: String,
}

// 列表排序方式（用于存储层）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementOrder {
    // 存储自然顺序
    Natural,
    // 按创建时间倒序
    CreatedAtDesc,
}
