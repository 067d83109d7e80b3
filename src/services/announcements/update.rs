use tracing::info;

use super::AnnouncementService;
use crate::errors::{BoardError, Result};
use crate::models::announcements::{entities::Announcement, requests::UpdateAnnouncementRequest};
use crate::utils::parse_announcement_id;

pub async fn update_announcement(
    service: &AnnouncementService,
    caller_identity: Option<&str>,
    announcement_id: &str,
    update_data: UpdateAnnouncementRequest,
) -> Result<Announcement> {
    let teacher = service.get_gate().authorize(caller_identity).await?;
    let id = parse_announcement_id(announcement_id)?;

    if update_data.is_empty() {
        return Err(BoardError::no_fields_provided("No fields to update"));
    }

    let storage = service.get_storage();
    let matched = storage.update_announcement_fields(&id, update_data).await?;
    if matched == 0 {
        return Err(BoardError::not_found("Announcement not found"));
    }

    info!("Announcement {} updated by {}", id, teacher.username);

    storage
        .get_announcement_by_id(&id)
        .await?
        .ok_or_else(|| BoardError::not_found("Announcement not found"))
}
