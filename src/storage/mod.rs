use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{
    announcements::{
        entities::Announcement,
        requests::{AnnouncementOrder, NewAnnouncement, UpdateAnnouncementRequest},
    },
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};

use crate::errors::Result;

pub mod memory_storage;
pub mod sea_orm_storage;

/// 内存存储的 URL scheme
pub const MEMORY_STORAGE_SCHEME: &str = "memory://";

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 公告管理方法
    // 写入公告，返回存储层分配的ID
    async fn insert_announcement(&self, announcement: NewAnnouncement) -> Result<String>;
    // 通过ID获取公告
    async fn get_announcement_by_id(&self, id: &str) -> Result<Option<Announcement>>;
    // 列出全部公告
    async fn list_announcements(&self, order: AnnouncementOrder) -> Result<Vec<Announcement>>;
    // 按ID更新提供的字段，返回匹配的记录数
    async fn update_announcement_fields(
        &self,
        id: &str,
        update: UpdateAnnouncementRequest,
    ) -> Result<u64>;
    // 按ID删除公告，返回删除的记录数
    async fn delete_announcement(&self, id: &str) -> Result<u64>;

    /// 教师凭据方法
    // 通过用户名获取教师
    async fn get_teacher_by_username(&self, username: &str) -> Result<Option<Teacher>>;
    // 创建教师（仅启动播种）
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 统计教师数量
    async fn count_teachers(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    if config.database.url.starts_with(MEMORY_STORAGE_SCHEME) {
        return Ok(Arc::new(memory_storage::MemoryStorage::new()));
    }

    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
