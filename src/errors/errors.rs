//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러는 최종적으로 다음 형태의 JSON 본문으로 렌더링됩니다.
//!
//! ```text
//! { "timestamp": "...", "status": 401, "error": "Unauthorized",
//!   "message": "Wrong Credentials", "path": "/v1/auth/login" }
//! ```
//!
//! 입력값 검증 실패는 `details` 필드에 필드별 메시지를 추가로 담습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(&self, email: &str) -> Result<User, AppError> {
//!     if self.user_repo.find_by_email(email).await?.is_some() {
//!         return Err(AppError::EmailAlreadyExists);
//!     }
//!     // ...
//! }
//! ```

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// 5xx 응답에서 내부 메시지 대신 노출되는 문구
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// 애플리케이션 전역 에러 타입
///
/// 서비스 경계에서 발생하는 모든 도메인 실패를 표현하며,
/// 가장 바깥의 에러 렌더러에서 JSON 에러 본문으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드별 입력값 검증 에러 (400 Bad Request, `details` 포함)
    #[error("Validation failed")]
    ValidationFailed(BTreeMap<String, String>),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이미 가입된 이메일 (409 Conflict)
    #[error("Email Already Exists")]
    EmailAlreadyExists,

    /// 비밀번호가 없는 OAuth 전용 계정으로 로컬 로그인 시도 (401 Unauthorized)
    #[error("OAuth Login Required")]
    OAuthOnlyAccount,

    /// 비밀번호 불일치 (401 Unauthorized)
    #[error("Wrong Credentials")]
    BadCredentials,

    /// 서명/만료/형식 검증에 실패한 토큰 (401 Unauthorized)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출되는 메시지
    ///
    /// 5xx 계열은 내부 정보를 감추고 고정 문구를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::InvalidToken(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            AppError::ValidationFailed(_)
            | AppError::EmailAlreadyExists
            | AppError::OAuthOnlyAccount
            | AppError::BadCredentials => self.to_string(),
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    /// 필드별 검증 메시지 (검증 실패일 때만 존재)
    pub fn details(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            AppError::ValidationFailed(details) => Some(details),
            _ => None,
        }
    }

    /// 요청 경로를 포함한 에러 응답 본문을 생성합니다.
    pub fn to_api_response(&self, path: &str) -> ApiErrorResponse {
        use actix_web::ResponseError;

        let mut body = ApiErrorResponse::new(self.status_code(), self.public_message(), path);
        body.details = self.details().cloned();
        body
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailAlreadyExists => StatusCode::CONFLICT,
            AppError::OAuthOnlyAccount
            | AppError::BadCredentials
            | AppError::InvalidToken(_)
            | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// `path`는 에러 렌더러 미들웨어가 요청 정보를 이용해 채워 넣습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(self.to_api_response(""))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .map(|e| match &e.message {
                        Some(msg) => msg.to_string(),
                        None => e.code.to_string(),
                    })
                    .unwrap_or_default();
                (field.to_string(), message)
            })
            .collect();

        AppError::ValidationFailed(details)
    }
}

/// JSON 에러 응답 본문
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: path.into(),
            details: None,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
