//! JWT 토큰 관리 서비스 구현
//!
//! HS256 대칭 서명 기반의 토큰 발급, 검증, 인증 주체 해석을 담당합니다.
//! 서명 키는 시작 시점에 base64 문자열에서 한 번 디코딩되어 불변으로 공유됩니다.
//!
//! 토큰은 상태를 갖지 않으며, 유효성은 서명과 만료 시각만으로 판단합니다.

use std::collections::BTreeSet;

use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

use crate::config::JwtConfig;
use crate::domain::dto::tokens::JwtResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::token::join_authorities;
use crate::domain::models::token::{TokenClaims, TokenKind};
use crate::errors::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// JWT 토큰 관리 서비스
///
/// 액세스 토큰(기본 1시간)과 리프레시 토큰(기본 7일)을 지원합니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// base64로 인코딩된 서명 키와 유효 기간으로 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 키가 비어 있거나 base64 형식이 아닌 경우
    pub fn new(secret_b64: &str, access_ttl: Duration, refresh_ttl: Duration) -> AppResult<Self> {
        let secret = base64::engine::general_purpose::STANDARD
            .decode(secret_b64.trim())
            .map_err(|e| AppError::InternalError(format!("JWT 서명 키 디코딩 실패: {}", e)))?;

        if secret.is_empty() {
            return Err(AppError::InternalError("JWT 서명 키가 비어 있습니다".to_string()));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
            validation,
            access_ttl,
            refresh_ttl,
        })
    }

    /// 환경 변수 설정으로 서비스를 생성합니다.
    pub fn from_config() -> AppResult<Self> {
        let (access_ttl, refresh_ttl) = ttl_from_settings(
            JwtConfig::expiration_hours(),
            JwtConfig::refresh_expiration_days(),
        )?;

        Self::new(&JwtConfig::secret()?, access_ttl, refresh_ttl)
    }

    /// 액세스 토큰 유효 시간 (초)
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// 주어진 subject와 권한으로 `now + ttl`에 만료되는 액세스 토큰을 발급합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue("user@example.com", ["USER"], Duration::hours(1))?;
    /// ```
    pub fn issue<I, S>(&self, subject: &str, authorities: I, ttl: Duration) -> AppResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.encode_claims(subject, &join_authorities(authorities), ttl, TokenKind::Access)
    }

    /// 리프레시 토큰을 발급합니다.
    pub fn issue_refresh<I, S>(&self, subject: &str, authorities: I) -> AppResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.encode_claims(
            subject,
            &join_authorities(authorities),
            self.refresh_ttl,
            TokenKind::Refresh,
        )
    }

    /// 액세스 토큰과 (선택적으로) 리프레시 토큰을 함께 발급합니다.
    ///
    /// `include_refresh`가 `false`이면 액세스 토큰만 담긴 응답을 반환합니다.
    pub fn issue_pair<I, S>(
        &self,
        subject: &str,
        authorities: I,
        include_refresh: bool,
    ) -> AppResult<JwtResponse>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let auth = join_authorities(authorities);

        let access_token = self.encode_claims(subject, &auth, self.access_ttl, TokenKind::Access)?;
        let refresh_token = if include_refresh {
            Some(self.encode_claims(subject, &auth, self.refresh_ttl, TokenKind::Refresh)?)
        } else {
            None
        };

        Ok(JwtResponse::bearer(
            access_token,
            refresh_token,
            self.access_ttl_seconds(),
        ))
    }

    fn encode_claims(
        &self,
        subject: &str,
        auth: &str,
        ttl: Duration,
        typ: TokenKind,
    ) -> AppResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            auth: auth.to_string(),
            typ,
            iat: now.timestamp(),
            exp: now
                .checked_add_signed(ttl)
                .ok_or_else(|| AppError::InternalError("토큰 만료 시각 계산 실패".to_string()))?
                .timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료를 검증합니다. 어떤 실패든 `false`를 반환합니다.
    pub fn validate(&self, token: &str) -> bool {
        match self.verify(token) {
            Ok(_) => true,
            Err(e) => {
                debug!("토큰 검증 실패: {}", e);
                false
            }
        }
    }

    /// 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 만료, 서명 불일치, 형식 오류
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::InvalidToken("Expired Token".to_string()),
                ErrorKind::InvalidSignature => {
                    AppError::InvalidToken("Invalid Token Signature".to_string())
                }
                _ => AppError::InvalidToken("Parse Error".to_string()),
            })
    }

    /// 토큰을 인증 주체로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 토큰 검증 실패
    /// * `AppError::AuthenticationError` - `auth` 클레임이 비어 있거나 없는 경우
    pub fn resolve(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.verify(token)?;
        let authorities: BTreeSet<String> = claims.authorities();

        if authorities.is_empty() {
            return Err(AppError::AuthenticationError("Authorization Required".to_string()));
        }

        Ok(AuthenticatedUser::new(claims.sub, authorities))
    }

    /// 토큰의 subject(이메일)를 추출합니다.
    pub fn subject_of(&self, token: &str) -> AppResult<String> {
        Ok(self.verify(token)?.sub)
    }

    /// `Authorization` 헤더 값에서 토큰 부분만 추출합니다.
    ///
    /// `"Bearer "` 접두사가 없거나 토큰이 비어 있으면 `None`.
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// 시간/일 단위 설정값을 토큰 유효 기간으로 변환합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - 값이 `Duration` 표현 범위를 벗어난 경우
pub(crate) fn ttl_from_settings(
    access_hours: i64,
    refresh_days: i64,
) -> AppResult<(Duration, Duration)> {
    let access_ttl = Duration::try_hours(access_hours).ok_or_else(|| {
        AppError::InternalError(format!("JWT_EXPIRATION_HOURS 범위 초과: {}", access_hours))
    })?;
    let refresh_ttl = Duration::try_days(refresh_days).ok_or_else(|| {
        AppError::InternalError(format!("JWT_REFRESH_EXPIRATION_DAYS 범위 초과: {}", refresh_days))
    })?;

    Ok((access_ttl, refresh_ttl))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "bG9jYWwtZGV2ZWxvcG1lbnQtc2lnbmluZy1rZXktY2hhbmdlLW1lIQ==";
    const OTHER_SECRET: &str = "YW5vdGhlci1zaWduaW5nLWtleS13aXRoLWVub3VnaC1ieXRlcw==";

    fn service() -> TokenService {
        TokenService::new(SECRET, Duration::hours(1), Duration::days(7)).unwrap()
    }

    #[test]
    fn test_resolve_roundtrips_subject_and_authorities() {
        let service = service();
        let token = service
            .issue("user@example.com", ["USER", "ADMIN"], Duration::hours(1))
            .unwrap();

        let principal = service.resolve(&token).unwrap();
        assert_eq!(principal.subject, "user@example.com");
        assert_eq!(
            principal.authorities,
            ["ADMIN".to_string(), "USER".to_string()].into_iter().collect()
        );
    }

    #[test]
    fn test_expired_token_fails_validation() {
        let service = service();
        let token = service
            .issue("user@example.com", ["USER"], Duration::seconds(-30))
            .unwrap();

        assert!(!service.validate(&token));
        assert!(matches!(service.verify(&token), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_token_signed_with_other_key_fails_validation() {
        let foreign = TokenService::new(OTHER_SECRET, Duration::hours(1), Duration::days(7)).unwrap();
        let token = foreign.issue("user@example.com", ["USER"], Duration::hours(1)).unwrap();

        assert!(!service().validate(&token));
    }

    #[test]
    fn test_malformed_tokens_never_panic() {
        let service = service();

        for token in ["", "abc", "a.b.c", "....", "eyJhbGciOiJIUzI1NiJ9.e30."] {
            assert!(!service.validate(token));
        }
    }

    #[test]
    fn test_tampered_token_fails_validation() {
        let service = service();
        let token = service.issue("user@example.com", ["USER"], Duration::hours(1)).unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(!service.validate(&tampered));
    }

    #[test]
    fn test_resolve_requires_authorities() {
        let service = service();
        let token = service
            .issue("user@example.com", Vec::<String>::new(), Duration::hours(1))
            .unwrap();

        assert!(service.validate(&token));
        match service.resolve(&token) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, "Authorization Required"),
            other => panic!("unexpected result: {:?}", other.map(|p| p.subject)),
        }
    }

    #[test]
    fn test_issue_pair_with_and_without_refresh() {
        let service = service();

        let pair = service.issue_pair("user@example.com", ["USER"], true).unwrap();
        assert_eq!(pair.grant_type, "Bearer");
        assert_eq!(pair.expires_in, 3600);
        let refresh = pair.refresh_token.unwrap();
        assert!(service.verify(&refresh).unwrap().is_refresh());
        assert!(service.verify(&pair.access_token).unwrap().is_access());

        let access_only = service.issue_pair("user@example.com", ["USER"], false).unwrap();
        assert!(access_only.refresh_token.is_none());
        assert!(!access_only.access_token.is_empty());
    }

    #[test]
    fn test_subject_of() {
        let service = service();
        let token = service.issue_refresh("user@example.com", ["USER"]).unwrap();

        assert_eq!(service.subject_of(&token).unwrap(), "user@example.com");
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(TokenService::extract_bearer_token("Bearer   "), None);
        assert_eq!(TokenService::extract_bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(TokenService::extract_bearer_token("bearer abc"), None);
    }

    #[test]
    fn test_ttl_settings_out_of_range() {
        let (access, refresh) = ttl_from_settings(1, 7).unwrap();
        assert_eq!(access, Duration::hours(1));
        assert_eq!(refresh, Duration::days(7));

        assert!(matches!(
            ttl_from_settings(i64::MAX, 7),
            Err(AppError::InternalError(_))
        ));
        assert!(matches!(
            ttl_from_settings(1, i64::MAX),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let service =
            TokenService::new(SECRET, Duration::days(100_000_000), Duration::days(7)).unwrap();

        assert!(matches!(
            service.issue("user@example.com", ["USER"], Duration::days(100_000_000)),
            Err(AppError::InternalError(_))
        ));
        assert!(service.issue_pair("user@example.com", ["USER"], true).is_err());
    }

    #[test]
    fn test_invalid_secret_rejected() {
        assert!(TokenService::new("%%%not-base64%%%", Duration::hours(1), Duration::days(1)).is_err());
        assert!(TokenService::new("", Duration::hours(1), Duration::days(1)).is_err());
    }
}
