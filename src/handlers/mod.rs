//! # HTTP Request Handlers Module
//!
//! 요청 파싱, 입력 검증, 서비스 호출, 응답 직렬화만 담당합니다.
//! 서비스는 `web::Data<ServiceRegistry>`로 주입되고, 인증 주체는
//! 요청 게이트가 붙여 둔 값을 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)
//! extractor로 꺼냅니다.
//!
//! ```text
//! Client ─► ErrorRenderer ─► Governor ─► Cors ─► Logger ─► NormalizePath ─► AuthMiddleware
//!                                                                              │
//!                                                                              ▼
//!                                                                  Handlers (이 모듈)
//!                                                                              │
//!                                                                              ▼
//!                                                                  Services ─► Repositories
//! ```
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러 본문은
//! 에러 렌더러가 요청 경로와 함께 작성합니다.

#[cfg(test)]
macro_rules! test_app {
    ($registry:expr) => {{
        let registry: crate::core::ServiceRegistry = $registry;
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(registry.clone()))
                .wrap(crate::middlewares::AuthMiddleware::new(
                    crate::config::SecurityConfig::new(true, false),
                    registry.token_service.clone(),
                ))
                .wrap(crate::middlewares::error_renderer())
                .configure(|cfg| crate::routes::configure_all_routes(cfg, true)),
        )
        .await
    }};
}

pub mod auth;
pub mod users;

#[cfg(test)]
pub(crate) fn test_registry() -> crate::core::ServiceRegistry {
    test_registry_with_google("http://127.0.0.1:9")
}

/// Google 토큰/UserInfo 엔드포인트를 `google_base` 아래로 향하게 한 레지스트리
#[cfg(test)]
pub(crate) fn test_registry_with_google(google_base: &str) -> crate::core::ServiceRegistry {
    use std::sync::Arc;

    use chrono::Duration;

    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::auth::{GoogleAuthService, GoogleOAuthSettings, TokenService};

    let token_service = TokenService::new(
        "bG9jYWwtZGV2ZWxvcG1lbnQtc2lnbmluZy1rZXktY2hhbmdlLW1lIQ==",
        Duration::hours(1),
        Duration::days(7),
    )
    .unwrap();

    let google = GoogleAuthService::new(GoogleOAuthSettings {
        client_id: Some("client-123.apps.googleusercontent.com".to_string()),
        client_secret: Some("client-secret".to_string()),
        redirect_uri: "http://localhost:8080/v1/auth/google/redirect".to_string(),
        auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
        token_uri: format!("{}/token", google_base),
        userinfo_uri: format!("{}/userinfo", google_base),
        state_secret: "state-secret".to_string(),
        state_timeout_minutes: 10,
    });

    crate::core::ServiceRegistry::build(
        Arc::new(InMemoryUserRepository::new()),
        token_service,
        4,
        false,
        Some(google),
    )
}
