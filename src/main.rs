//! 계정 서비스 메인 애플리케이션
//!
//! 환경 설정을 읽어 저장소와 서비스를 초기화하고,
//! 요청 게이트와 에러 렌더러가 적용된 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use account_service_backend::config::{RateLimitConfig, SecurityConfig, ServerConfig};
use account_service_backend::core::ServiceRegistry;
use account_service_backend::middlewares::{error_renderer, AuthMiddleware};
use account_service_backend::routes::configure_all_routes;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

/// 운영 서버와 테스트가 공유하는 App 구성
///
/// 미들웨어는 안쪽부터 Rate Limiting, 요청 게이트, 경로 정규화, 접근 로그,
/// CORS, 에러 렌더러 순서로 적용됩니다. Governor는 안쪽 서비스의 future가
/// `Unpin`이어야 하므로 가장 안쪽에 둡니다.
macro_rules! account_app {
    ($registry:expr, $security:expr, $token_service:expr, $governor:expr, $cors:expr) => {{
        let security_config: SecurityConfig = $security;
        let oauth_enabled = security_config.oauth_enabled;

        App::new()
            .app_data($registry)
            .wrap(Governor::new($governor))
            .wrap(AuthMiddleware::new(security_config, $token_service))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .wrap($cors)
            .wrap(error_renderer())
            .configure(move |cfg| configure_all_routes(cfg, oauth_enabled))
    }};
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let security_config = SecurityConfig::from_env();

    let registry = match ServiceRegistry::initialize(&security_config).await {
        Ok(registry) => registry,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(registry, security_config).await
}

/// HTTP 서버를 구성하고 실행합니다
async fn start_http_server(
    registry: ServiceRegistry,
    security_config: SecurityConfig,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    if !security_config.oauth_enabled {
        warn!("Google OAuth 로그인이 비활성화되어 있습니다");
    }

    let allowed_origins = ServerConfig::cors_allowed_origins();
    let token_service = Arc::clone(&registry.token_service);
    let registry = web::Data::new(registry);

    HttpServer::new(move || {
        account_app!(
            registry.clone(),
            security_config.clone(),
            token_service.clone(),
            &governor_conf,
            configure_cors(&allowed_origins)
        )
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 출력으로 남깁니다.
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => println!("📄 {} 파일 로드 됨 (profile={})", file, profile),
        Err(e) => println!("⚠️ 환경 파일 로드 실패 (profile={}): {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `info,actix_web=info`를 사용합니다.
///
/// ```bash
/// RUST_LOG=account_service_backend::middlewares=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`(쉼표 구분)에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_service_backend::repositories::users::InMemoryUserRepository;
    use account_service_backend::services::auth::TokenService;
    use actix_web::{http::StatusCode, test};
    use chrono::Duration;
    use serde_json::{json, Value};

    const SECRET: &str = "bG9jYWwtZGV2ZWxvcG1lbnQtc2lnbmluZy1rZXktY2hhbmdlLW1lIQ==";

    fn registry() -> ServiceRegistry {
        let token_service =
            TokenService::new(SECRET, Duration::hours(1), Duration::days(7)).unwrap();
        ServiceRegistry::build(
            Arc::new(InMemoryUserRepository::new()),
            token_service,
            4,
            false,
            None,
        )
    }

    fn peer() -> std::net::SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    #[actix_web::test]
    async fn test_full_middleware_stack_serves_requests() {
        let registry = registry();
        let token_service = Arc::clone(&registry.token_service);
        let governor_conf = GovernorConfigBuilder::default()
            .requests_per_second(100)
            .burst_size(200)
            .use_headers()
            .finish()
            .unwrap();
        let app = test::init_service(account_app!(
            web::Data::new(registry),
            SecurityConfig::new(false, false),
            token_service,
            &governor_conf,
            configure_cors(&["http://localhost:3000".to_string()])
        ))
        .await;

        let req = test::TestRequest::get().uri("/health").peer_addr(peer()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/v1/auth/signup")
            .peer_addr(peer())
            .set_json(json!({
                "email": "user@example.com",
                "username": "tester",
                "password": "password123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/v1/users/me/").peer_addr(peer()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 401);
    }
}
