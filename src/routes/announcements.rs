use actix_web::{HttpResponse, Result as ActixResult, guard, web};

use crate::models::announcements::requests::{
    CreateAnnouncementRequest, TeacherIdentityQuery, UpdateAnnouncementRequest,
};
use crate::services::AnnouncementService;

// HTTP处理程序
pub async fn list_announcements(
    service: web::Data<AnnouncementService>,
) -> ActixResult<HttpResponse> {
    let announcements = service.list_announcements().await?;
    Ok(HttpResponse::Ok().json(announcements))
}

pub async fn list_active_announcements(
    service: web::Data<AnnouncementService>,
) -> ActixResult<HttpResponse> {
    let announcements = service.list_active_announcements().await?;
    Ok(HttpResponse::Ok().json(announcements))
}

pub async fn create_announcement(
    service: web::Data<AnnouncementService>,
    identity: web::Query<TeacherIdentityQuery>,
    announcement_data: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    let announcement = service
        .create_announcement(
            identity.teacher_username.as_deref(),
            announcement_data.into_inner(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(announcement))
}

pub async fn update_announcement(
    service: web::Data<AnnouncementService>,
    announcement_id: web::Path<String>,
    identity: web::Query<TeacherIdentityQuery>,
    update_data: web::Json<UpdateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    let announcement = service
        .update_announcement(
            identity.teacher_username.as_deref(),
            &announcement_id,
            update_data.into_inner(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(announcement))
}

pub async fn delete_announcement(
    service: web::Data<AnnouncementService>,
    announcement_id: web::Path<String>,
    identity: web::Query<TeacherIdentityQuery>,
) -> ActixResult<HttpResponse> {
    let response = service
        .delete_announcement(identity.teacher_username.as_deref(), &announcement_id)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

// 配置路由
pub fn configure_announcement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/announcements")
            .service(
                // 管理视图：全部公告；教师创建公告
                web::resource("")
                    .route(web::get().to(list_announcements))
                    .route(web::post().to(create_announcement)),
            )
            .service(
                // 展示视图：当前有效的公告，需在 /{announcement_id} 之前注册
                // 仅匹配 GET，其余方法交给 /{announcement_id}
                web::resource("/active")
                    .guard(guard::Get())
                    .route(web::get().to(list_active_announcements)),
            )
            .service(
                web::resource("/{announcement_id}")
                    .route(web::put().to(update_announcement))
                    .route(web::delete().to(delete_announcement)),
            ),
    );
}
