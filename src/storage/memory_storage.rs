//! 内存存储实现
//!
//! 基于 DashMap，单条记录的读写由分片锁保证原子性。
//! 用于开发环境（`memory://`）与测试，进程退出后数据丢失。

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::Result;
use crate::models::{
    announcements::{
        entities::Announcement,
        requests::{AnnouncementOrder, NewAnnouncement, UpdateAnnouncementRequest},
    },
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};
use crate::storage::Storage;
use crate::utils::time::now_iso;

#[derive(Debug, Clone)]
struct StoredAnnouncement {
    // 写入序号，用于自然顺序与稳定排序
    seq: u64,
    record: Announcement,
}

#[derive(Default)]
pub struct MemoryStorage {
    announcements: DashMap<String, StoredAnnouncement>,
    teachers: DashMap<String, Teacher>,
    next_seq: AtomicU64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn insert_announcement(&self, announcement: NewAnnouncement) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        let record = Announcement {
            id: id.clone(),
            message: announcement.message,
            start_date: announcement.start_date,
            expiration_date: Some(announcement.expiration_date),
            created_at: Some(announcement.created_at),
        };
        self.announcements
            .insert(id.clone(), StoredAnnouncement { seq, record });

        Ok(id)
    }

    async fn get_announcement_by_id(&self, id: &str) -> Result<Option<Announcement>> {
        Ok(self.announcements.get(id).map(|entry| entry.record.clone()))
    }

    async fn list_announcements(&self, order: AnnouncementOrder) -> Result<Vec<Announcement>> {
        let mut stored: Vec<StoredAnnouncement> = self
            .announcements
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        match order {
            AnnouncementOrder::Natural => stored.sort_by_key(|s| s.seq),
            AnnouncementOrder::CreatedAtDesc => stored.sort_by(|a, b| {
                b.record
                    .created_at
                    .cmp(&a.record.created_at)
                    .then(a.seq.cmp(&b.seq))
            }),
        }

        Ok(stored.into_iter().map(|s| s.record).collect())
    }

    async fn update_announcement_fields(
        &self,
        id: &str,
        update: UpdateAnnouncementRequest,
    ) -> Result<u64> {
        let Some(mut entry) = self.announcements.get_mut(id) else {
            return Ok(0);
        };

        let record = &mut entry.record;
        if let Some(message) = update.message {
            record.message = message;
        }
        if let Some(start_date) = update.start_date {
            record.start_date = Some(start_date);
        }
        if let Some(expiration_date) = update.expiration_date {
            record.expiration_date = Some(expiration_date);
        }

        Ok(1)
    }

    async fn delete_announcement(&self, id: &str) -> Result<u64> {
        Ok(self.announcements.remove(id).map_or(0, |_| 1))
    }

    async fn get_teacher_by_username(&self, username: &str) -> Result<Option<Teacher>> {
        Ok(self.teachers.get(username).map(|entry| entry.value().clone()))
    }

    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        let teacher = Teacher {
            username: teacher.username,
            display_name: teacher.display_name,
            created_at: now_iso(),
        };
        self.teachers
            .insert(teacher.username.clone(), teacher.clone());
        Ok(teacher)
    }

    async fn count_teachers(&self) -> Result<u64> {
        Ok(self.teachers.len() as u64)
    }
}
