//! 요청 게이트 미들웨어
//!
//! 모든 요청에 대해 `Authorization: Bearer <token>` 헤더를 검사하여
//! 인증 주체를 요청 extensions에 붙이고, 공개 경로가 아닌 요청은
//! 인증 주체가 없으면 401로 거절합니다.
//!
//! ```text
//! UNAUTHENTICATED ──(유효한 액세스 토큰)──► AUTHENTICATED ──► 핸들러
//!       │
//!       ├──(토큰 없음 / 관대 모드의 잘못된 토큰)──► 공개 경로? ──► 핸들러
//!       │                                              └─ 아니오 ─► 401
//!       └──(엄격 모드의 잘못된 토큰 / 권한 없는 토큰)──► 401
//! ```
//!
//! 리프레시 토큰은 Bearer 자격 증명으로 인정하지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::SecurityConfig;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

pub struct AuthMiddleware {
    config: Rc<SecurityConfig>,
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(config: SecurityConfig, token_service: Arc<TokenService>) -> Self {
        Self {
            config: Rc::new(config),
            token_service,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            config: self.config.clone(),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::AuthenticatedUser;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::Duration;
    use serde_json::Value;

    const SECRET: &str = "bG9jYWwtZGV2ZWxvcG1lbnQtc2lnbmluZy1rZXktY2hhbmdlLW1lIQ==";

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(SECRET, Duration::hours(1), Duration::days(7)).unwrap())
    }

    async fn me(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.subject)
    }

    async fn health() -> HttpResponse {
        HttpResponse::Ok().body("ok")
    }

    macro_rules! gate_app {
        ($strict:expr, $tokens:expr) => {
            test::init_service(
                App::new()
                    .wrap(AuthMiddleware::new(SecurityConfig::new(true, $strict), $tokens))
                    .route("/health", web::get().to(health))
                    .route("/v1/users/me", web::get().to(me)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_public_path_without_token() {
        let app = gate_app!(false, token_service());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_protected_path_without_token() {
        let app = gate_app!(false, token_service());

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/v1/users/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Authentication is required to access this resource.");
        assert_eq!(body["status"], 401);
    }

    #[actix_web::test]
    async fn test_valid_access_token_attaches_principal() {
        let tokens = token_service();
        let token = tokens.issue("user@example.com", ["USER"], Duration::hours(1)).unwrap();
        let app = gate_app!(false, tokens);

        let req = test::TestRequest::get()
            .uri("/v1/users/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "user@example.com");
    }

    #[actix_web::test]
    async fn test_permissive_mode_ignores_bad_token_on_public_path() {
        let app = gate_app!(false, token_service());

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/v1/users/me")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_strict_mode_rejects_bad_token_on_public_path() {
        let app = gate_app!(true, token_service());

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unauthorized");
    }

    #[actix_web::test]
    async fn test_refresh_token_is_not_a_bearer_credential() {
        let tokens = token_service();
        let refresh = tokens.issue_refresh("user@example.com", ["USER"]).unwrap();
        let app = gate_app!(false, tokens);

        let req = test::TestRequest::get()
            .uri("/v1/users/me")
            .insert_header(("Authorization", format!("Bearer {}", refresh)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_token_without_authorities_is_rejected() {
        let tokens = token_service();
        let token = tokens
            .issue("user@example.com", Vec::<String>::new(), Duration::hours(1))
            .unwrap();
        let app = gate_app!(false, tokens);

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Authorization Required");
    }
}
