use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::auth::{LoginRequest, LoginResponse};

use super::AuthService;

pub async fn handle_login(
    _service: &AuthService,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    if login_request.is_authenticated {
        tracing::info!("Login flag accepted");
        Ok(HttpResponse::Ok().json(LoginResponse::authenticated()))
    } else {
        tracing::info!("Login flag rejected");
        // 认证失败按既有契约返回 404 而非 401/403
        Ok(HttpResponse::NotFound().json(LoginResponse::rejected()))
    }
}
