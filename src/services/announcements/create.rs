use tracing::info;

use super::AnnouncementService;
use crate::errors::Result;
use crate::models::announcements::{
    entities::Announcement,
    requests::{CreateAnnouncementRequest, NewAnnouncement},
};
use crate::utils::time::now_iso;

pub async fn create_announcement(
    service: &AnnouncementService,
    caller_identity: Option<&str>,
    data: CreateAnnouncementRequest,
) -> Result<Announcement> {
    let teacher = service.get_gate().authorize(caller_identity).await?;

    let new_announcement = NewAnnouncement {
        message: data.message,
        start_date: data.start_date,
        expiration_date: data.expiration_date,
        created_at: now_iso(),
    };

    let id = service
        .get_storage()
        .insert_announcement(new_announcement.clone())
        .await?;

    info!("Announcement {} created by {}", id, teacher.username);

    Ok(Announcement {
        id,
        message: new_announcement.message,
        start_date: new_announcement.start_date,
        expiration_date: Some(new_announcement.expiration_date),
        created_at: Some(new_announcement.created_at),
    })
}
