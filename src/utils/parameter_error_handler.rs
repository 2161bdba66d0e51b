//! 请求参数解析错误处理
//!
//! 统一 JSON body 与 query string 解析失败时的响应格式。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器，挂在 `web::JsonConfig::error_handler` 上
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("Invalid JSON payload: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::BadRequest,
            message,
        )),
    )
    .into()
}

/// 查询参数解析错误处理器，挂在 `web::QueryConfig::error_handler` 上
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("Invalid query parameters: {err}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::BadRequest,
            message,
        )),
    )
    .into()
}
