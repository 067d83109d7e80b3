//! 公告存储操作

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{BoardError, Result};
use crate::models::announcements::{
    entities::Announcement,
    requests::{AnnouncementOrder, NewAnnouncement, UpdateAnnouncementRequest},
};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入公告，ID 由存储层生成
    pub async fn insert_announcement_impl(&self, req: NewAnnouncement) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();

        let model = ActiveModel {
            id: Set(id.clone()),
            message: Set(req.message),
            start_date: Set(req.start_date),
            expiration_date: Set(Some(req.expiration_date)),
            created_at: Set(Some(req.created_at)),
        };

        Announcements::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| BoardError::database_operation(format!("创建公告失败: {e}")))?;

        Ok(id)
    }

    /// 通过 ID 获取公告
    pub async fn get_announcement_by_id_impl(&self, id: &str) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| BoardError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 列出全部公告
    pub async fn list_announcements_impl(
        &self,
        order: AnnouncementOrder,
    ) -> Result<Vec<Announcement>> {
        let mut select = Announcements::find();

        if order == AnnouncementOrder::CreatedAtDesc {
            select = select.order_by_desc(Column::CreatedAt);
        }

        let announcements = select
            .all(&self.db)
            .await
            .map_err(|e| BoardError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(announcements
            .into_iter()
            .map(|m| m.into_announcement())
            .collect())
    }

    /// 更新公告字段，返回匹配的记录数
    pub async fn update_announcement_fields_impl(
        &self,
        id: &str,
        update: UpdateAnnouncementRequest,
    ) -> Result<u64> {
        // 先检查公告是否存在
        let existing = self.get_announcement_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(0);
        }

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            ..Default::default()
        };

        if let Some(message) = update.message {
            model.message = Set(message);
        }

        if let Some(start_date) = update.start_date {
            model.start_date = Set(Some(start_date));
        }

        if let Some(expiration_date) = update.expiration_date {
            model.expiration_date = Set(Some(expiration_date));
        }

        match model.update(&self.db).await {
            Ok(_) => Ok(1),
            // 检查与更新之间被删除
            Err(DbErr::RecordNotUpdated) => Ok(0),
            Err(e) => Err(BoardError::database_operation(format!("更新公告失败: {e}"))),
        }
    }

    /// 删除公告，返回删除的记录数
    pub async fn delete_announcement_impl(&self, id: &str) -> Result<u64> {
        let result = Announcements::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| BoardError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
