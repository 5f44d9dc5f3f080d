//! # Domain Models
//!
//! 영속되지 않는 도메인 모델들입니다.
//!
//! - [`auth`] - 요청 범위의 인증 주체
//! - [`token`] - JWT 클레임
//! - [`oauth`] - Google 사용자 정보와 OAuth 권한 매핑

pub mod auth;
pub mod oauth;
pub mod token;
