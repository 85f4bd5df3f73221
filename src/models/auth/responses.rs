use serde::Serialize;

/// 认证通过的固定应答文案
pub const AUTHENTICATED_MESSAGE: &str = "autenticado pa, como debe de ser";
/// 认证被拒的固定应答文案
pub const REJECTED_MESSAGE: &str = "a tu casa infiltrado";

// 登录响应模型
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

impl LoginResponse {
    /// 认证通过的应答
    pub fn authenticated() -> Self {
        Self {
            success: true,
            message: AUTHENTICATED_MESSAGE.to_string(),
        }
    }

    /// 认证被拒的应答
    pub fn rejected() -> Self {
        Self {
            success: false,
            message: REJECTED_MESSAGE.to_string(),
        }
    }
}
