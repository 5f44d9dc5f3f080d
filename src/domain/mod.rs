//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 계정 엔티티와 API 경계의 데이터 구조,
//! 인증/OAuth 모델을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (User, Role)
//! ├── dto       - 요청/응답 데이터 전송 객체
//! └── models    - 인증 주체, 토큰 클레임, OAuth 모델
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::SignupRequest;
//! use crate::domain::dto::users::response::UserResponse;
//!
//! payload.validate()?;
//! let user = auth_service
//!     .register_standard(&payload.email, &payload.username, &payload.password)
//!     .await?;
//! let response = UserResponse::from(user);
//! ```

pub mod entities;
pub mod dto;
pub mod models;
