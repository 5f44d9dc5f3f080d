//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! - [`auth_middleware`] - Bearer 토큰 검증과 공개 경로 판정을 수행하는 요청 게이트
//! - [`error_renderer`] - 모든 에러 응답을 경로가 포함된 JSON 본문으로 통일
//!
//! # 등록 순서
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(AuthMiddleware::new(security_config, token_service)) // 가장 안쪽
//!     .wrap(NormalizePath::trim())
//!     .wrap(Logger::default())
//!     .wrap(cors)
//!     .wrap(Governor::new(&governor_conf))
//!     .wrap(error_renderer()) // 가장 바깥
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod error_renderer;

pub use auth_middleware::AuthMiddleware;
pub use error_renderer::error_renderer;
