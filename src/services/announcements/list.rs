use tracing::debug;

use super::AnnouncementService;
use crate::errors::Result;
use crate::models::announcements::{entities::Announcement, requests::AnnouncementOrder};

pub async fn list_announcements(service: &AnnouncementService) -> Result<Vec<Announcement>> {
    let announcements = service
        .get_storage()
        .list_announcements(AnnouncementOrder::CreatedAtDesc)
        .await?;

    debug!("Listed {} announcements", announcements.len());
    Ok(announcements)
}
