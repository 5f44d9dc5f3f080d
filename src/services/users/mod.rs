//! 사용자 관리 서비스 모듈
//!
//! 계정 조회, 프로필 수정, 계정 삭제를 제공합니다.

pub mod user_service;

pub use user_service::UserService;
