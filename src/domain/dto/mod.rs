//! # Data Transfer Objects
//!
//! API 경계에서 사용하는 요청/응답 구조체입니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/   - 회원가입, 로그인, 프로필 수정, OAuth 콜백
//! │   └── response/  - 사용자 응답, Google OAuth 응답
//! └── tokens/        - 토큰 갱신 요청, JWT 응답
//! ```

pub mod tokens;
pub mod users;

pub use tokens::*;
pub use users::*;
