use crate::config::AppConfig;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::services::AnnouncementService;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub announcements: Arc<AnnouncementService>,
}

/// 初始化教师账号
/// 如果教师表为空，则写入配置中列出的用户名
async fn seed_teachers(storage: &Arc<dyn Storage>, usernames: &[String]) {
    if usernames.is_empty() {
        debug!("No seed teachers configured, skipping teacher seed");
        return;
    }

    match storage.count_teachers().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} teacher(s), skipping teacher seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No teachers found, seeding {} teacher(s)...", usernames.len());
        }
        Err(e) => {
            warn!("Failed to count teachers: {}, skipping teacher seed", e);
            return;
        }
    }

    for username in usernames
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
    {
        let request = CreateTeacherRequest {
            username: username.to_string(),
            display_name: None,
        };

        match storage.create_teacher(request).await {
            Ok(teacher) => info!("Seeded teacher '{}'", teacher.username),
            Err(e) => warn!("Failed to seed teacher '{}': {}", username, e),
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化、教师播种与服务实例
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化教师账号（如果需要）
    seed_teachers(&storage, &config.auth.seed_teachers).await;

    warn!(
        "Mutating endpoints trust the caller-supplied teacher_username without verifying any secret; \
         deploy behind an authenticating proxy"
    );

    let announcements = Arc::new(AnnouncementService::new(storage));

    StartupContext { announcements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;

    #[actix_web::test]
    async fn test_seed_teachers_on_empty_store() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        seed_teachers(
            &storage,
            &["mrodriguez".to_string(), " ".to_string(), "mchen".to_string()],
        )
        .await;

        assert_eq!(storage.count_teachers().await.unwrap(), 2);
        assert!(
            storage
                .get_teacher_by_username("mchen")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[actix_web::test]
    async fn test_seed_skipped_when_teachers_exist() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        seed_teachers(&storage, &["mrodriguez".to_string()]).await;
        seed_teachers(&storage, &["intruder".to_string()]).await;

        assert_eq!(storage.count_teachers().await.unwrap(), 1);
        assert!(
            storage
                .get_teacher_by_username("intruder")
                .await
                .unwrap()
                .is_none()
        );
    }
}
