//! Users Entity Module
//!
//! 로컬 인증과 OAuth 인증을 모두 지원하는 User 엔티티와 역할 정의입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local("user@example.com", "username", hashed_password);
//!
//! // OAuth 사용자 생성
//! let oauth_user = User::new_oauth(
//!     "user@gmail.com",
//!     "OAuth User",
//!     "google",
//!     "google_user_id_123",
//!     None,
//! );
//! ```

pub mod role;
pub mod user;

pub use role::Role;
pub use user::User;
