/// API 业务错误码
///
/// 随 ApiResponse 返回给客户端，与 HTTP 状态码独立。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    NotFound = 40400,
    ValidationFailed = 42200,
}
