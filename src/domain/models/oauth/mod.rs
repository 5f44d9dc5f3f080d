//! # OAuth Domain Models Module
//!
//! OAuth 2.0 / OpenID Connect 로그인에 사용되는 모델입니다.
//!
//! - [`authority`] - 프로바이더가 부여한 권한을 역할 문자열로 정규화
//! - [`google_oauth_model`] - Google UserInfo 응답 모델

pub mod authority;
pub mod google_oauth_model;

pub use authority::{map_authorities, map_authority, GrantedAuthority};
pub use google_oauth_model::google_user::GoogleUserInfo;
