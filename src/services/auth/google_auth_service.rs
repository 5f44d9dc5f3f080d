//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization Code Grant 플로우로 Google 계정을 인증합니다.
//! 계정 생성/갱신과 토큰 발급은 [`AuthService`](crate::services::auth::AuthService)가 담당하고,
//! 이 서비스는 Google과의 통신과 state 검증만 수행합니다.
//!
//! ## 플로우
//!
//! ```text
//! GET /v1/auth/google/login
//!        │  state 생성 + 인증 URL 구성
//!        ▼
//! 302 ─► accounts.google.com ─► 사용자 동의
//!        │
//!        ▼
//! GET /v1/auth/google/redirect?code=...&state=...
//!        │  1. state 서명/만료 검증
//!        │  2. code ─► access_token (+ id_token)
//!        │  3. access_token ─► UserInfo
//!        ▼
//! (GoogleUserInfo, Vec<GrantedAuthority>)
//! ```
//!
//! ## State 형식
//!
//! `"<unix seconds>.<hex(sha256("<unix seconds>:<secret>"))>"`
//!
//! 서버에 저장하지 않고, 서명과 발급 시각만으로 검증합니다.
//! 브라우저 쿠키나 nonce와 묶이지 않으므로 만료 전의 state는 어느 user agent에서든
//! 통과합니다. 로그인 CSRF 방어는 제공하지 않으며, 콜백이 세션을 만들지 않고
//! 토큰을 JSON으로만 돌려준다는 점에 기대고 있습니다.

use chrono::Utc;
use log::{info, warn};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::{
    config::{GoogleOAuthConfig, OAuthConfig},
    domain::{
        dto::users::response::{GoogleTokenResponse, OAuthLoginUrlResponse},
        models::oauth::{GoogleUserInfo, GrantedAuthority},
    },
    errors::{AppError, AppResult},
};

const GOOGLE_SCOPE: &str = "openid email profile";

/// Google OAuth 클라이언트 설정
#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
    pub state_secret: String,
    pub state_timeout_minutes: i64,
}

impl GoogleOAuthSettings {
    pub fn from_env() -> Self {
        Self {
            client_id: GoogleOAuthConfig::client_id(),
            client_secret: GoogleOAuthConfig::client_secret(),
            redirect_uri: GoogleOAuthConfig::redirect_uri(),
            auth_uri: GoogleOAuthConfig::auth_uri(),
            token_uri: GoogleOAuthConfig::token_uri(),
            userinfo_uri: GoogleOAuthConfig::userinfo_uri(),
            state_secret: OAuthConfig::state_secret(),
            state_timeout_minutes: OAuthConfig::session_timeout_minutes(),
        }
    }
}

/// Google OAuth 인증 서비스
#[derive(Clone)]
pub struct GoogleAuthService {
    http: reqwest::Client,
    settings: GoogleOAuthSettings,
}

impl GoogleAuthService {
    pub fn new(settings: GoogleOAuthSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    pub fn from_config() -> Self {
        Self::new(GoogleOAuthSettings::from_env())
    }

    /// Google 인증 페이지 URL과 state를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `GOOGLE_CLIENT_ID`가 설정되지 않은 경우
    pub fn login_url(&self) -> AppResult<OAuthLoginUrlResponse> {
        let client_id = self.client_id()?;
        let state = self.sign_state(Utc::now().timestamp());

        let params = [
            ("client_id", client_id),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("scope", GOOGLE_SCOPE),
            ("response_type", "code"),
            ("state", state.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", self.settings.auth_uri, query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization Code로 Google 사용자 정보와 권한을 얻습니다.
    ///
    /// 토큰 응답에 `id_token`이 있으면 OIDC 권한을, 없으면 OAuth2 권한을 부여합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state 검증 실패
    /// * `AppError::ExternalServiceError` - Google API 통신/응답 오류
    pub async fn authenticate_with_code(
        &self,
        auth_code: &str,
        state: &str,
    ) -> AppResult<(GoogleUserInfo, Vec<GrantedAuthority>)> {
        self.verify_state(state)?;

        let token = self.exchange_code_for_token(auth_code).await?;
        let attributes = self.fetch_user_attributes(&token.access_token).await?;

        let user_info: GoogleUserInfo = serde_json::from_value(Value::Object(attributes.clone()))
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e))
            })?;

        let authority = match token.id_token {
            Some(id_token) => GrantedAuthority::Oidc {
                id_token,
                user_info: attributes,
            },
            None => GrantedAuthority::OAuth2 { attributes },
        };

        info!("🌐 Google 인증 완료: {}", user_info.email);
        Ok((user_info, vec![authority]))
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<GoogleTokenResponse> {
        let client_id = self.client_id()?;
        let client_secret = self.settings.client_secret.as_deref().ok_or_else(|| {
            AppError::InternalError("GOOGLE_CLIENT_SECRET이 설정되지 않았습니다".to_string())
        })?;

        let params = [
            ("code", auth_code),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.settings.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    async fn fetch_user_attributes(&self, access_token: &str) -> AppResult<Map<String, Value>> {
        let response = self
            .http
            .get(&self.settings.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}",
                error_text
            )));
        }

        match response.json::<Value>().await {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(AppError::ExternalServiceError(
                "Google 사용자 정보가 객체 형식이 아닙니다".to_string(),
            )),
            Err(e) => Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 파싱 실패: {}",
                e
            ))),
        }
    }

    fn client_id(&self) -> AppResult<&str> {
        self.settings.client_id.as_deref().ok_or_else(|| {
            AppError::InternalError("GOOGLE_CLIENT_ID가 설정되지 않았습니다".to_string())
        })
    }

    fn state_digest(&self, issued_at: i64) -> String {
        let data = format!("{}:{}", issued_at, self.settings.state_secret);
        format!("{:x}", Sha256::digest(data.as_bytes()))
    }

    fn sign_state(&self, issued_at: i64) -> String {
        format!("{}.{}", issued_at, self.state_digest(issued_at))
    }

    /// state의 서명과 발급 시각을 검증합니다.
    ///
    /// 이 서버가 최근에 발급한 state인지만 확인합니다. 요청한 브라우저와의
    /// 연결은 검증하지 않습니다.
    pub fn verify_state(&self, state: &str) -> AppResult<()> {
        let invalid = || AppError::AuthenticationError("유효하지 않은 OAuth state".to_string());

        let (issued_at, digest) = state.split_once('.').ok_or_else(invalid)?;
        let issued_at: i64 = issued_at.parse().map_err(|_| invalid())?;

        if digest != self.state_digest(issued_at) {
            warn!("OAuth state 서명 불일치");
            return Err(invalid());
        }

        let age = Utc::now().timestamp() - issued_at;
        if age < 0 || age > self.settings.state_timeout_minutes.saturating_mul(60) {
            warn!("만료된 OAuth state (발급 후 {}초)", age);
            return Err(AppError::AuthenticationError("만료된 OAuth state".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GoogleOAuthSettings {
        GoogleOAuthSettings {
            client_id: Some("client-123.apps.googleusercontent.com".to_string()),
            client_secret: Some("client-secret".to_string()),
            redirect_uri: "http://localhost:8080/v1/auth/google/redirect".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_uri: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
            state_secret: "state-secret".to_string(),
            state_timeout_minutes: 10,
        }
    }

    #[test]
    fn test_login_url_contains_parameters() {
        let service = GoogleAuthService::new(settings());

        let response = service.login_url().unwrap();

        assert!(response
            .login_url
            .starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(response
            .login_url
            .contains("client_id=client-123.apps.googleusercontent.com"));
        assert!(response.login_url.contains("scope=openid%20email%20profile"));
        assert!(response.login_url.contains("response_type=code"));
        assert!(response.login_url.contains(&format!(
            "redirect_uri={}",
            urlencoding::encode("http://localhost:8080/v1/auth/google/redirect")
        )));
        assert!(response
            .login_url
            .contains(&format!("state={}", urlencoding::encode(&response.state))));
        assert!(service.verify_state(&response.state).is_ok());
    }

    #[test]
    fn test_login_url_requires_client_id() {
        let service = GoogleAuthService::new(GoogleOAuthSettings {
            client_id: None,
            ..settings()
        });

        assert!(matches!(service.login_url(), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_state_tampering_is_rejected() {
        let service = GoogleAuthService::new(settings());
        let state = service.sign_state(Utc::now().timestamp());

        let (ts, digest) = state.split_once('.').unwrap();
        let shifted = format!("{}.{}", ts.parse::<i64>().unwrap() - 1, digest);

        for bad in ["", "no-dot", "abc.def", shifted.as_str()] {
            assert!(matches!(
                service.verify_state(bad),
                Err(AppError::AuthenticationError(_))
            ));
        }
    }

    #[test]
    fn test_state_from_other_secret_is_rejected() {
        let other = GoogleAuthService::new(GoogleOAuthSettings {
            state_secret: "different".to_string(),
            ..settings()
        });
        let state = other.sign_state(Utc::now().timestamp());

        assert!(GoogleAuthService::new(settings()).verify_state(&state).is_err());
    }

    #[test]
    fn test_expired_state_is_rejected() {
        let service = GoogleAuthService::new(settings());
        let state = service.sign_state(Utc::now().timestamp() - 11 * 60);

        match service.verify_state(&state) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_authenticate_rejects_bad_state_before_network() {
        let service = GoogleAuthService::new(GoogleOAuthSettings {
            token_uri: "http://127.0.0.1:9/unreachable".to_string(),
            ..settings()
        });

        let result = service.authenticate_with_code("code", "forged.state").await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
