//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Entity as Teachers};
use crate::errors::{BoardError, Result};
use crate::models::teachers::{entities::Teacher, requests::CreateTeacherRequest};
use crate::utils::time::now_iso;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

impl SeaOrmStorage {
    /// 通过用户名获取教师
    pub async fn get_teacher_by_username_impl(&self, username: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(username.to_string())
            .one(&self.db)
            .await
            .map_err(|e| BoardError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let model = ActiveModel {
            username: Set(req.username),
            display_name: Set(req.display_name),
            created_at: Set(now_iso()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| BoardError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self) -> Result<u64> {
        Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| BoardError::database_operation(format!("统计教师数量失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::teachers::requests::CreateTeacherRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::tests::temp_sqlite_storage;

    #[actix_web::test]
    async fn test_create_get_count() {
        let (storage, _guard) = temp_sqlite_storage().await;
        assert_eq!(storage.count_teachers().await.unwrap(), 0);

        let created = storage
            .create_teacher(CreateTeacherRequest {
                username: "mrodriguez".to_string(),
                display_name: Some("Ms. Rodriguez".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(created.username, "mrodriguez");

        assert_eq!(storage.count_teachers().await.unwrap(), 1);
        let fetched = storage
            .get_teacher_by_username("mrodriguez")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.display_name.as_deref(), Some("Ms. Rodriguez"));
        // 用户名精确匹配
        assert!(
            storage
                .get_teacher_by_username("MRODRIGUEZ")
                .await
                .unwrap()
                .is_none()
        );
    }
}
