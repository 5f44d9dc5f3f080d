//! 계정 서비스 백엔드
//!
//! 이메일/비밀번호 계정과 Google OAuth 계정을 관리하고,
//! HS256 JWT로 상태 없는 인증을 제공하는 REST API 서비스입니다.
//!
//! # Features
//!
//! - **회원가입/로그인**: bcrypt 해시 기반 이메일/비밀번호 인증
//! - **JWT 인증**: 액세스/리프레시 토큰 발급과 요청 게이트 검증
//! - **OAuth 2.0**: Google 소셜 로그인 (계정 생성 또는 기존 계정 연결)
//! - **계정 관리**: 내 정보 조회/수정/삭제, 공개 프로필 조회
//! - **저장소 선택**: MongoDB 또는 프로세스 내 메모리 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 요청 게이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로그인/회원가입, 토큰, 계정 관리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Arc<dyn UserRepository>
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::config::SecurityConfig;
//! use account_service_backend::core::ServiceRegistry;
//!
//! let registry = ServiceRegistry::initialize(&SecurityConfig::from_env()).await?;
//! let tokens = registry.auth_service.login("user@example.com", "password123").await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
