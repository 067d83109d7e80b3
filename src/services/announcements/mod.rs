pub mod active;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::MessageResponse;
use crate::models::announcements::{
    entities::Announcement,
    requests::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
};
use crate::services::CredentialGate;
use crate::storage::Storage;
use crate::utils::time::now_iso;

pub struct AnnouncementService {
    storage: Arc<dyn Storage>,
    gate: CredentialGate,
}

impl AnnouncementService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            gate: CredentialGate::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn get_gate(&self) -> &CredentialGate {
        &self.gate
    }

    // 获取全部公告（管理视图）
    pub async fn list_announcements(&self) -> Result<Vec<Announcement>> {
        list::list_announcements(self).await
    }

    // 获取当前有效的公告
    pub async fn list_active_announcements(&self) -> Result<Vec<Announcement>> {
        active::list_active_announcements(self, &now_iso()).await
    }

    // 创建公告
    pub async fn create_announcement(
        &self,
        caller_identity: Option<&str>,
        data: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        create::create_announcement(self, caller_identity, data).await
    }

    // 更新公告
    pub async fn update_announcement(
        &self,
        caller_identity: Option<&str>,
        announcement_id: &str,
        update_data: UpdateAnnouncementRequest,
    ) -> Result<Announcement> {
        update::update_announcement(self, caller_identity, announcement_id, update_data).await
    }

    // 删除公告
    pub async fn delete_announcement(
        &self,
        caller_identity: Option<&str>,
        announcement_id: &str,
    ) -> Result<MessageResponse> {
        delete::delete_announcement(self, caller_identity, announcement_id).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::BoardError;
    use crate::models::announcements::requests::AnnouncementOrder;
    use crate::models::teachers::requests::CreateTeacherRequest;
    use crate::storage::memory_storage::MemoryStorage;

    pub(crate) const TEACHER: &str = "mrodriguez";

    pub(crate) async fn service_with_teacher() -> (AnnouncementService, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .create_teacher(CreateTeacherRequest {
                username: TEACHER.to_string(),
                display_name: Some("Ms. Rodriguez".to_string()),
            })
            .await
            .unwrap();
        (AnnouncementService::new(storage.clone()), storage)
    }

    fn exam_moved() -> CreateAnnouncementRequest {
        CreateAnnouncementRequest {
            message: "Exam moved".to_string(),
            expiration_date: "2099-01-01T00:00:00".to_string(),
            start_date: Some("2020-01-01T00:00:00".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_create_then_listed_as_active() {
        let (service, _) = service_with_teacher().await;
        let before = now_iso();

        let created = service
            .create_announcement(Some(TEACHER), exam_moved())
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.message, "Exam moved");
        assert_eq!(created.start_date.as_deref(), Some("2020-01-01T00:00:00"));
        assert_eq!(
            created.expiration_date.as_deref(),
            Some("2099-01-01T00:00:00")
        );
        let created_at = created.created_at.clone().unwrap();
        assert!(created_at >= before && created_at <= now_iso());

        let active = service.list_active_announcements().await.unwrap();
        assert_eq!(active, vec![created]);
    }

    #[actix_web::test]
    async fn test_ids_are_unique_and_stable() {
        let (service, _) = service_with_teacher().await;
        let mut ids = Vec::new();
        for _ in 0..5 {
            let created = service
                .create_announcement(Some(TEACHER), exam_moved())
                .await
                .unwrap();
            ids.push(created.id);
        }

        let listed: Vec<String> = service
            .list_announcements()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
        for id in &ids {
            assert!(listed.contains(id));
        }
    }

    #[actix_web::test]
    async fn test_update_only_message() {
        let (service, _) = service_with_teacher().await;
        let created = service
            .create_announcement(Some(TEACHER), exam_moved())
            .await
            .unwrap();

        let updated = service
            .update_announcement(
                Some(TEACHER),
                &created.id,
                UpdateAnnouncementRequest {
                    message: Some("Exam moved again".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.message, "Exam moved again");
        assert_eq!(updated.start_date, created.start_date);
        assert_eq!(updated.expiration_date, created.expiration_date);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn test_empty_update_leaves_record_unchanged() {
        let (service, storage) = service_with_teacher().await;
        let created = service
            .create_announcement(Some(TEACHER), exam_moved())
            .await
            .unwrap();

        let err = service
            .update_announcement(
                Some(TEACHER),
                &created.id,
                UpdateAnnouncementRequest::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::NoFieldsProvided(_)));

        let stored = storage
            .get_announcement_by_id(&created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, created);
    }

    #[actix_web::test]
    async fn test_update_validation_order() {
        let (service, _) = service_with_teacher().await;
        let update = UpdateAnnouncementRequest {
            message: Some("x".to_string()),
            ..Default::default()
        };

        // 身份校验先于ID校验
        let err = service
            .update_announcement(None, "not-an-id", update.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::Unauthorized(_)));

        // ID校验先于空字段校验
        let err = service
            .update_announcement(Some(TEACHER), "not-an-id", UpdateAnnouncementRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidIdentifier(_)));

        let err = service
            .update_announcement(
                Some(TEACHER),
                "67e55044-10b1-426f-9247-bb680e5fe0c8",
                update,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_delete() {
        let (service, storage) = service_with_teacher().await;
        let created = service
            .create_announcement(Some(TEACHER), exam_moved())
            .await
            .unwrap();

        let err = service
            .delete_announcement(Some(TEACHER), "67e55044-10b1-426f-9247-bb680e5fe0c8")
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));
        assert_eq!(
            storage
                .list_announcements(AnnouncementOrder::Natural)
                .await
                .unwrap()
                .len(),
            1
        );

        let err = service
            .delete_announcement(Some(TEACHER), "bogus")
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidIdentifier(_)));

        let response = service
            .delete_announcement(Some(TEACHER), &created.id)
            .await
            .unwrap();
        assert_eq!(response.message, "Announcement deleted");
        assert!(service.list_announcements().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_mutations_require_teacher() {
        let (service, storage) = service_with_teacher().await;
        let created = service
            .create_announcement(Some(TEACHER), exam_moved())
            .await
            .unwrap();

        for identity in [None, Some(""), Some("student42")] {
            let err = service
                .create_announcement(identity, exam_moved())
                .await
                .unwrap_err();
            assert!(matches!(err, BoardError::Unauthorized(_)));

            let err = service
                .update_announcement(
                    identity,
                    &created.id,
                    UpdateAnnouncementRequest {
                        message: Some("hijacked".to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, BoardError::Unauthorized(_)));

            let err = service
                .delete_announcement(identity, &created.id)
                .await
                .unwrap_err();
            assert!(matches!(err, BoardError::Unauthorized(_)));
        }

        let stored = storage
            .list_announcements(AnnouncementOrder::Natural)
            .await
            .unwrap();
        assert_eq!(stored, vec![created]);
    }
}
