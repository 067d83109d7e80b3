// 业务错误码，随 ApiResponse 一并返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    InternalServerError = 1005,

    // 公告相关
    AnnouncementNotFound = 2000,
    AnnouncementInvalidId = 2001,
    AnnouncementNoFields = 2002,
}
