//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 갱신과 Google OAuth 엔드포인트입니다.
//!
//! | Method | Path | 응답 |
//! |--------|------|------|
//! | POST | `/v1/auth/signup` | 201 사용자 |
//! | POST | `/v1/auth/login` | 200 토큰 쌍 |
//! | POST | `/v1/auth/refresh` | 200 토큰 쌍 |
//! | GET | `/v1/auth/google/login` | 302 Google 인증 페이지 |
//! | GET | `/v1/auth/google/redirect` | 200 토큰 쌍 / 302 실패 페이지 |
//! | GET | `/v1/auth/google/success` | 200 (인증 필요) |
//! | GET | `/v1/auth/google/failure` | 401 |
use actix_web::{get, http::header, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::config::AuthProvider;
use crate::core::ServiceRegistry;
use crate::domain::dto::tokens::RefreshTokenRequest;
use crate::domain::dto::users::request::{LoginRequest, OAuthCallbackQuery, SignupRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::GoogleAuthService;

const GOOGLE_FAILURE_PATH: &str = "/v1/auth/google/failure";
const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// 이메일/비밀번호 회원가입
#[post("/signup")]
pub async fn signup(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = registry
        .auth_service
        .register_standard(&payload.email, &payload.username, &payload.password)
        .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 로컬 로그인 핸들러
#[post("/login")]
pub async fn login(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let tokens = registry
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(tokens))
}

#[post("/refresh")]
pub async fn refresh(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let tokens = registry.auth_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(tokens))
}

fn google_service(registry: &ServiceRegistry) -> Result<&GoogleAuthService, AppError> {
    registry
        .google_auth_service
        .as_deref()
        .ok_or_else(|| AppError::NotFound("OAuth login is disabled".to_string()))
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Google 인증 페이지로 리다이렉트
#[get("/google/login")]
pub async fn google_login(registry: web::Data<ServiceRegistry>) -> Result<HttpResponse, AppError> {
    let url_response = google_service(&registry)?.login_url()?;

    Ok(redirect_to(&url_response.login_url))
}

/// Google OAuth 콜백
///
/// 인증에 실패하면 실패 페이지로 리다이렉트합니다.
#[get("/google/redirect")]
pub async fn google_redirect(
    registry: web::Data<ServiceRegistry>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let google = google_service(&registry)?;

    if let Some(error) = &query.error {
        log::warn!(
            "Google OAuth 에러: {} - {}",
            error,
            query.error_description.as_deref().unwrap_or("-")
        );
        return Ok(redirect_to(GOOGLE_FAILURE_PATH));
    }

    let (Some(code), Some(state)) = (query.code.as_deref(), query.state.as_deref()) else {
        log::warn!("Google OAuth 콜백에 code 또는 state 누락");
        return Ok(redirect_to(GOOGLE_FAILURE_PATH));
    };

    let (profile, granted) = match google.authenticate_with_code(code, state).await {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Google OAuth 인증 실패: {}", e);
            return Ok(redirect_to(GOOGLE_FAILURE_PATH));
        }
    };

    let upserted = registry
        .auth_service
        .register_or_update_oauth(
            &profile.email,
            profile.verified_email,
            AuthProvider::Google.as_str(),
            &profile.id,
            &profile.display_name(),
            profile.picture.clone(),
        )
        .await;

    let user = match upserted {
        Ok(user) => user,
        Err(AppError::AuthenticationError(reason)) => {
            log::warn!("Google OAuth 계정 처리 거절: {}", reason);
            return Ok(redirect_to(GOOGLE_FAILURE_PATH));
        }
        Err(e) => return Err(e),
    };

    let tokens = registry.auth_service.oauth_login(&user, &granted)?;

    log::info!("Google OAuth 로그인 성공: {}", user.email);
    Ok(HttpResponse::Ok().json(tokens))
}

#[get("/google/success")]
pub async fn google_success(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "email": user.email(),
        "authorities": user.authorities,
    }))
}

#[get("/google/failure")]
pub async fn google_failure() -> Result<HttpResponse, AppError> {
    Err(AppError::AuthenticationError(LOGIN_FAILED_MESSAGE.to_string()))
}
