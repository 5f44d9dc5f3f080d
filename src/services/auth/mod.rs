//! 인증 서비스 모듈
//!
//! - [`token_service`] - HS256 JWT 발급/검증/인증 주체 해석
//! - [`auth_service`] - 회원가입, 로그인, 토큰 갱신, OAuth 계정 처리
//! - [`google_auth_service`] - Google OAuth 2.0 Authorization Code 플로우
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let token_service = Arc::new(TokenService::from_config()?);
//! let auth_service = AuthService::new(user_repo, token_service, 10, false);
//! let tokens = auth_service.login("user@example.com", "password123").await?;
//! ```

pub mod auth_service;
pub mod google_auth_service;
pub mod token_service;

pub use auth_service::AuthService;
pub use google_auth_service::{GoogleAuthService, GoogleOAuthSettings};
pub use token_service::TokenService;
