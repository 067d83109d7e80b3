//! 请求参数错误处理
//!
//! 将 actix 的 JSON / Query 解析错误转换为统一的错误响应。

use actix_web::{
    HttpRequest, ResponseError,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    web,
};
use tracing::debug;

use crate::errors::BoardError;

/// JSON 请求体解析失败：缺少必填字段或格式错误时返回 422
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Overflow { limit }
        | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            format!("Request body exceeds {limit} bytes")
        }
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        other => format!("Invalid JSON payload: {other}"),
    };
    debug!("JSON payload rejected for {}: {}", req.path(), message);

    let response = BoardError::validation(message).error_response();
    InternalError::from_response(err, response).into()
}

/// JSON 提取器配置：请求体大小上限与统一错误处理
pub fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler)
}

/// 查询参数解析失败：返回 400
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid query parameters: {err}");
    debug!("Query rejected for {}: {}", req.path(), message);

    let response = BoardError::bad_request(message).error_response();
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, http::StatusCode, test};
    use serde_json::{Value, json};

    async fn echo(body: web::Json<Value>) -> HttpResponse {
        HttpResponse::Ok().json(body.into_inner())
    }

    #[actix_web::test]
    async fn test_json_limit_applies() {
        let app = test::init_service(
            App::new()
                .app_data(json_config(100))
                .route("/", web::post().to(echo)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({ "message": "x".repeat(10 * 1024) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Request body exceeds 100 bytes");

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({ "message": "short" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
