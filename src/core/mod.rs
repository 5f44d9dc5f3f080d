//! # Core Module
//!
//! 애플리케이션 조립에 필요한 핵심 구성 요소입니다.
//!
//! - [`registry`] - 저장소 선택과 서비스 생성, 핸들러 간 공유

pub mod registry;

pub use registry::ServiceRegistry;
