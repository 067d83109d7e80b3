//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称，
//! 并通过 `ResponseError` 映射为 HTTP 状态码与统一的错误响应体。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_board_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum BoardError {
            $($variant(String),)*
        }

        impl BoardError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(BoardError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(BoardError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(BoardError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl BoardError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        BoardError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_board_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Serialization("E004", "Serialization Error"),
    BadRequest("E005", "Bad Request"),
    Validation("E006", "Validation Error"),
    Unauthorized("E007", "Authentication Error"),
    InvalidIdentifier("E008", "Invalid Identifier"),
    NoFieldsProvided("E009", "No Fields Provided"),
    NotFound("E010", "Resource Not Found"),
}

impl BoardError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 对应的 API 错误码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BoardError::BadRequest(_) => ErrorCode::BadRequest,
            BoardError::Validation(_) => ErrorCode::ValidationFailed,
            BoardError::Unauthorized(_) => ErrorCode::Unauthorized,
            BoardError::InvalidIdentifier(_) => ErrorCode::AnnouncementInvalidId,
            BoardError::NoFieldsProvided(_) => ErrorCode::AnnouncementNoFields,
            BoardError::NotFound(_) => ErrorCode::AnnouncementNotFound,
            _ => ErrorCode::InternalServerError,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BoardError {}

impl ResponseError for BoardError {
    fn status_code(&self) -> StatusCode {
        match self {
            BoardError::BadRequest(_)
            | BoardError::InvalidIdentifier(_)
            | BoardError::NoFieldsProvided(_) => StatusCode::BAD_REQUEST,
            BoardError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BoardError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            BoardError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // 服务端错误不向调用方暴露存储细节
        let message = if status.is_server_error() {
            error!("{}", self.format_simple());
            "Internal server error".to_string()
        } else {
            self.message().to_string()
        };
        HttpResponse::build(status).json(ApiResponse::error(self.error_code(), message))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for BoardError {
    fn from(err: sea_orm::DbErr) -> Self {
        BoardError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
