//! # Domain Entities Module
//!
//! 저장소에 영속되는 핵심 엔티티들을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! └── users/
//!     ├── user.rs  ← User 엔티티
//!     └── role.rs  ← Role (GUEST / USER / ADMIN)
//! ```
//!
//! ## 불변 조건
//!
//! - `email`은 저장소 전체에서 유일합니다.
//! - 비밀번호 해시와 OAuth 프로바이더+ID 중 정확히 하나만 채워집니다.
//! - `id`는 저장 시점에 증가하는 시퀀스에서 할당됩니다.

pub mod users;
