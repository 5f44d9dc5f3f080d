//! 에러 처리 모듈
//!
//! [`AppError`]와 JSON 에러 본문 [`ApiErrorResponse`]를 제공합니다.

pub mod errors;

pub use errors::*;
