//! # 로그인/회원가입 오케스트레이터
//!
//! 사용자 저장소 조회, bcrypt 비밀번호 비교, JWT 발급을 조합하여
//! 회원가입, 로그인, 토큰 갱신, OAuth 계정 처리를 수행합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! signup  ─► 이메일 중복 확인 ─► bcrypt 해싱 ─► 저장 (Role USER)
//! login   ─► 이메일 조회 ─► OAuth 전용 계정 확인 ─► bcrypt 비교 ─► 토큰 쌍 발급
//! refresh ─► 리프레시 토큰 검증 ─► subject 조회 ─► 새 액세스 토큰 발급
//! oauth   ─► (provider, id) 또는 이메일 조회 ─► 갱신 또는 생성 ─► 토큰 쌍 발급
//! ```

use std::sync::Arc;

use log::{info, warn};

use crate::{
    domain::{
        dto::tokens::JwtResponse,
        entities::users::User,
        models::oauth::{map_authorities, GrantedAuthority},
    },
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserRepository,
    services::auth::token_service::TokenService,
};

/// 로그인/회원가입 서비스
#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
    rotate_refresh_tokens: bool,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
        rotate_refresh_tokens: bool,
    ) -> Self {
        Self {
            user_repo,
            token_service,
            bcrypt_cost,
            rotate_refresh_tokens,
        }
    }

    /// 이메일/비밀번호 계정 생성
    ///
    /// # Errors
    ///
    /// * `AppError::EmailAlreadyExists` - 이미 가입된 이메일
    pub async fn register_standard(
        &self,
        email: &str,
        username: &str,
        raw_password: &str,
    ) -> AppResult<User> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            warn!("회원가입 거절 (이메일 중복): {}", email);
            return Err(AppError::EmailAlreadyExists);
        }

        let hash_start = std::time::Instant::now();
        let password_hash =
            bcrypt::hash(raw_password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self
            .user_repo
            .insert(User::new_local(email, username, password_hash))
            .await?;

        info!("🆕 회원가입 완료: {} (id={:?})", user.email, user.id);
        Ok(user)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공 시 역할 키 하나만 권한으로 가진 액세스/리프레시 토큰 쌍을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 가입되지 않은 이메일
    /// * `AppError::OAuthOnlyAccount` - 비밀번호가 없는 OAuth 전용 계정
    /// * `AppError::BadCredentials` - 비밀번호 불일치
    pub async fn login(&self, email: &str, raw_password: &str) -> AppResult<JwtResponse> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))?;

        let password_hash = match user.password_hash.as_deref() {
            Some(hash) => hash,
            None => {
                warn!("OAuth 전용 계정의 비밀번호 로그인 시도: {}", email);
                return Err(AppError::OAuthOnlyAccount);
            }
        };

        let is_valid = bcrypt::verify(raw_password, password_hash).context("비밀번호 검증 실패")?;

        if !is_valid {
            warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::BadCredentials);
        }

        info!("🔑 로그인 성공: {}", email);
        self.token_service
            .issue_pair(&user.email, [user.role.key()], true)
    }

    /// OAuth 계정 갱신 또는 생성
    ///
    /// `(provider, oauth_id)` 또는 이메일로 기존 계정을 찾으면 OAuth 정보를 연결하고
    /// 비밀번호를 제거합니다. 없으면 `USER` 역할의 새 OAuth 계정을 생성합니다.
    /// 같은 입력으로 여러 번 호출해도 계정은 하나만 유지됩니다.
    ///
    /// 이메일 조회와 계정 생성은 프로바이더가 이메일을 검증한 경우에만 수행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 연결된 계정이 없고 이메일이 검증되지 않은 경우
    pub async fn register_or_update_oauth(
        &self,
        email: &str,
        email_verified: bool,
        provider: &str,
        oauth_id: &str,
        name: &str,
        picture: Option<String>,
    ) -> AppResult<User> {
        let existing = match self.user_repo.find_by_oauth(provider, oauth_id).await? {
            Some(user) => Some(user),
            None if !email_verified => {
                warn!("검증되지 않은 OAuth 이메일 거절: {} ({})", email, provider);
                return Err(AppError::AuthenticationError(
                    "Unverified OAuth Email".to_string(),
                ));
            }
            None => self.user_repo.find_by_email(email).await?,
        };

        let name = Some(name.trim().to_string()).filter(|n| !n.is_empty());

        match existing {
            Some(mut user) => {
                user.link_oauth(provider, oauth_id, name, picture);
                let user = self.user_repo.update(user).await?;
                info!("🔗 OAuth 계정 갱신: {} ({})", user.email, provider);
                Ok(user)
            }
            None => {
                let username = name.unwrap_or_else(|| {
                    email.split('@').next().unwrap_or_default().to_string()
                });
                let user = self
                    .user_repo
                    .insert(User::new_oauth(email, username, provider, oauth_id, picture))
                    .await?;
                info!("🆕 OAuth 계정 생성: {} ({})", user.email, provider);
                Ok(user)
            }
        }
    }

    /// OAuth 로그인 토큰 발급
    ///
    /// 권한은 사용자 역할 키와 프로바이더 권한을 정규화한 값의 합집합입니다.
    pub fn oauth_login(&self, user: &User, granted: &[GrantedAuthority]) -> AppResult<JwtResponse> {
        let mut authorities = map_authorities(granted);
        authorities.insert(user.role.key().to_string());

        self.token_service.issue_pair(&user.email, &authorities, true)
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// `JWT_ROTATE_REFRESH_TOKENS`가 켜져 있으면 새 리프레시 토큰도 함께 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 검증 실패 또는 리프레시 토큰이 아닌 경우
    /// * `AppError::NotFound` - 토큰 subject에 해당하는 사용자가 없는 경우
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<JwtResponse> {
        let claims = self
            .token_service
            .verify(refresh_token)
            .map_err(|_| AppError::InvalidToken("Invalid Refresh Token".to_string()))?;

        if !claims.is_refresh() {
            warn!("리프레시 요청에 액세스 토큰 사용: {}", claims.sub);
            return Err(AppError::InvalidToken("Invalid Refresh Token".to_string()));
        }

        let user = self
            .user_repo
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AppError::NotFound("User Not Found".to_string()))?;

        self.token_service
            .issue_pair(&user.email, [user.role.key()], self.rotate_refresh_tokens)
    }
}
