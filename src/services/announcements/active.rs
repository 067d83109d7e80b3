//! 有效公告筛选
//!
//! 有效窗口为半开区间 [start_date, expiration_date)，时间以字符串字典序比较。

use tracing::debug;

use super::AnnouncementService;
use crate::errors::Result;
use crate::models::announcements::{entities::Announcement, requests::AnnouncementOrder};

pub async fn list_active_announcements(
    service: &AnnouncementService,
    now: &str,
) -> Result<Vec<Announcement>> {
    let announcements = service
        .get_storage()
        .list_announcements(AnnouncementOrder::Natural)
        .await?;

    let active = filter_active(announcements, now);
    debug!("{} announcements active at {}", active.len(), now);
    Ok(active)
}

/// 判断公告在 `now` 时刻是否有效
pub fn is_active(announcement: &Announcement, now: &str) -> bool {
    // 缺少过期时间的记录永远无效
    let Some(expiration) = announcement
        .expiration_date
        .as_deref()
        .filter(|s| !s.is_empty())
    else {
        return false;
    };

    if let Some(start) = announcement.start_date.as_deref().filter(|s| !s.is_empty())
        && start > now
    {
        return false;
    }

    expiration > now
}

/// 筛选有效公告并按创建时间倒序排列，缺失创建时间的排在最后
pub fn filter_active(announcements: Vec<Announcement>, now: &str) -> Vec<Announcement> {
    let mut active: Vec<Announcement> = announcements
        .into_iter()
        .filter(|a| is_active(a, now))
        .collect();

    active.sort_by(|a, b| {
        let a_created = a.created_at.as_deref().unwrap_or("");
        let b_created = b.created_at.as_deref().unwrap_or("");
        b_created.cmp(a_created)
    });

    active
}
