//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시점에 [`ServiceRegistry`](crate::core::registry::ServiceRegistry)에서
//! 한 번 생성되어 핸들러에 공유됩니다.
//!
//! - [`users`] - 계정 조회, 프로필 수정, 계정 삭제
//! - [`auth`] - JWT, 로그인/회원가입, Google OAuth

pub mod auth;
pub mod users;
