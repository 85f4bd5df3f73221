use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::warn;

use crate::errors::AuthGateError;
use crate::models::{ApiResponse, ErrorCode};

// JSON 请求体错误处理器
//
// 反序列化失败（字段缺失、类型不符）回 422，其余载荷问题回 400。
// 业务层只会拿到通过校验的请求体。
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let (gate_error, code, mut builder) = match &err {
        JsonPayloadError::Deserialize(e) => (
            AuthGateError::validation(e.to_string()),
            ErrorCode::ValidationFailed,
            HttpResponse::UnprocessableEntity(),
        ),
        JsonPayloadError::ContentType => (
            AuthGateError::payload_format("Content type must be application/json"),
            ErrorCode::BadRequest,
            HttpResponse::BadRequest(),
        ),
        other => (
            AuthGateError::payload_format(other.to_string()),
            ErrorCode::BadRequest,
            HttpResponse::BadRequest(),
        ),
    };

    warn!("[{}] {}", gate_error.code(), gate_error.format_simple());

    let response = builder.json(ApiResponse::error_empty(code, gate_error.message()));
    InternalError::from_response(err, response).into()
}
