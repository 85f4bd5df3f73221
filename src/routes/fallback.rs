use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::{ApiResponse, ErrorCode};

pub async fn not_found() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::NotFound,
        "Route not found",
    )))
}

// 配置路由（放在最后作为 fallback）
pub fn configure_fallback_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(not_found));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_unknown_route_returns_json_404() {
        let app = test::init_service(App::new().configure(configure_fallback_routes)).await;
        let req = test::TestRequest::get().uri("/v1/auth/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::NotFound as i32);
    }
}
