//! Google OAuth 응답 DTO 모듈
//!
//! Google OAuth 2.0 Authorization Code Grant 플로우에서 사용되는 응답 DTO들입니다.

use serde::{Deserialize, Serialize};

/// Google OAuth 2.0 토큰 교환 응답
///
/// Authorization Code를 Access Token으로 교환할 때 Google이 반환하는 데이터입니다.
/// `openid` 스코프를 요청하면 `id_token`이 함께 내려옵니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    /// OpenID Connect ID 토큰
    pub id_token: Option<String>,
}

/// OAuth 로그인 URL 응답
#[derive(Debug, Serialize)]
pub struct OAuthLoginUrlResponse {
    /// Google OAuth 인증 페이지 URL
    pub login_url: String,

    /// CSRF 방지용 state 파라미터
    ///
    /// 콜백에서 받은 state와 반드시 일치 확인해야 합니다.
    pub state: String,
}
