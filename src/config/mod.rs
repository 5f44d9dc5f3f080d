//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 정적 설정 타입으로 모아서 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호 해싱 관련 설정
//! - [`auth_config`] - JWT, Google OAuth 관련 설정
//! - [`security_config`] - 공개 경로, 요청 게이트 동작 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let secret = JwtConfig::secret()?;
//! let ttl_hours = JwtConfig::expiration_hours();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongodb"   # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//!
//! # JWT 설정 (base64 인코딩된 키)
//! export JWT_SECRET="..."
//!
//! # 환경 설정
//! export ENVIRONMENT="production"    # development, test, staging, production
//! export BCRYPT_COST="12"            # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;
pub mod security_config;

pub use data_config::*;
pub use auth_config::*;
pub use security_config::*;
