pub mod login;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::auth::LoginRequest;

/// 认证服务
///
/// 无任何持有状态，登录判定是纯函数，可被任意并发调用。
pub struct AuthService;

impl AuthService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 登录验证
    pub async fn login(&self, login_request: LoginRequest) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request).await
    }
}
