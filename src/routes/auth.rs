use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::LoginRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(user_data: web::Json<LoginRequest>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(user_data.into_inner()).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/v1/auth").route("/login", web::post().to(login)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;

    use crate::utils::json_error_handler;

    macro_rules! login_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .configure(configure_auth_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_login_authenticated() {
        let app = login_app!();
        let req = test::TestRequest::post()
            .uri("/v1/auth/login")
            .set_json(json!({"is_authenticated": true}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": true, "message": "autenticado pa, como debe de ser"})
        );
    }

    #[actix_web::test]
    async fn test_login_rejected() {
        let app = login_app!();
        let req = test::TestRequest::post()
            .uri("/v1/auth/login")
            .set_json(json!({"is_authenticated": false}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "a tu casa infiltrado"})
        );
    }

    #[actix_web::test]
    async fn test_login_missing_field() {
        let app = login_app!();
        let req = test::TestRequest::post()
            .uri("/v1/auth/login")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_login_wrong_field_type() {
        let app = login_app!();
        let req = test::TestRequest::post()
            .uri("/v1/auth/login")
            .set_json(json!({"is_authenticated": "yes"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_login_is_idempotent() {
        let app = login_app!();
        let mut bodies = Vec::new();
        for _ in 0..3 {
            let req = test::TestRequest::post()
                .uri("/v1/auth/login")
                .set_json(json!({"is_authenticated": true}))
                .to_request();
            bodies.push(test::call_and_read_body(&app, req).await);
        }
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[1], bodies[2]);
    }
}
