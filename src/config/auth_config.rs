//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 전통적인 인증
//! 2. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 3. **JWT 토큰**: Stateless 인증을 위한 JSON Web Token (HS256)
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! # base64로 인코딩된 대칭 서명 키 (운영 환경에서는 필수)
//! export JWT_SECRET="c2VjcmV0LWtleS1mb3ItaHMyNTYtc2lnbmluZy0xMjM0NTY="
//! export JWT_EXPIRATION_HOURS="1"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! export JWT_ROTATE_REFRESH_TOKENS="false"
//! ```
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/v1/auth/google/redirect"
//! ```
//!
//! ### OAuth 보안 설정
//! ```bash
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export OAUTH_SESSION_TIMEOUT_MINUTES="10"
//! ```

use std::env;

use crate::config::data_config::{env_flag, Environment};
use crate::errors::{AppError, AppResult};

/// 개발 환경 전용 기본 서명 키 (base64)
const DEV_JWT_SECRET: &str = "bG9jYWwtZGV2ZWxvcG1lbnQtc2lnbmluZy1rZXktY2hhbmdlLW1lIQ==";

/// Google OAuth 2.0 설정
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> Option<String> {
        env::var("GOOGLE_CLIENT_ID").ok().filter(|v| !v.trim().is_empty())
    }

    pub fn client_secret() -> Option<String> {
        env::var("GOOGLE_CLIENT_SECRET").ok().filter(|v| !v.trim().is_empty())
    }

    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/v1/auth/google/redirect".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }
}

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// base64로 인코딩된 서명 키를 반환합니다.
    ///
    /// 운영 환경에서 `JWT_SECRET`이 없으면 에러를 반환하고,
    /// 그 외 환경에서는 경고 후 개발용 키를 사용합니다.
    pub fn secret() -> AppResult<String> {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => Ok(secret.trim().to_string()),
            _ if Environment::current().is_production() => Err(AppError::InternalError(
                "JWT_SECRET must be set in production".to_string(),
            )),
            _ => {
                log::warn!("JWT_SECRET not set, using development key (not secure for production!)");
                Ok(DEV_JWT_SECRET.to_string())
            }
        }
    }

    /// 액세스 토큰 유효 시간 (시간 단위, 기본 1시간)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|h| *h > 0)
            .unwrap_or(1)
    }

    /// 리프레시 토큰 유효 기간 (일 단위, 기본 7일)
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|d| *d > 0)
            .unwrap_or(7)
    }

    /// 토큰 갱신 시 새 리프레시 토큰도 함께 발급할지 여부
    pub fn rotate_refresh_tokens() -> bool {
        env_flag("JWT_ROTATE_REFRESH_TOKENS", false)
    }
}

/// OAuth state 파라미터 관련 설정
pub struct OAuthConfig;

impl OAuthConfig {
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET").unwrap_or_else(|_| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        })
    }

    pub fn session_timeout_minutes() -> i64 {
        env::var("OAUTH_SESSION_TIMEOUT_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|m| *m > 0)
            .unwrap_or(10)
    }
}

/// 계정의 인증 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google OAuth 계정
    Google,
}

impl AuthProvider {
    /// 저장소에 기록되는 프로바이더 등록 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
        }
    }
}
