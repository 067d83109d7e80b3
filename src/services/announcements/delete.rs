use tracing::info;

use super::AnnouncementService;
use crate::errors::{BoardError, Result};
use crate::models::MessageResponse;
use crate::utils::parse_announcement_id;

pub async fn delete_announcement(
    service: &AnnouncementService,
    caller_identity: Option<&str>,
    announcement_id: &str,
) -> Result<MessageResponse> {
    let teacher = service.get_gate().authorize(caller_identity).await?;
    let id = parse_announcement_id(announcement_id)?;

    let deleted = service.get_storage().delete_announcement(&id).await?;
    if deleted == 0 {
        return Err(BoardError::not_found("Announcement not found"));
    }

    info!("Announcement {} deleted by {}", id, teacher.username);
    Ok(MessageResponse::new("Announcement deleted"))
}
