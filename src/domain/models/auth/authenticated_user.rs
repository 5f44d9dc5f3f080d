//! 요청 범위의 인증 주체
//!
//! 요청 게이트가 토큰을 검증한 뒤 요청 extensions에 넣어두고,
//! 핸들러는 extractor로 꺼내 사용합니다. 요청이 끝나면 함께 폐기됩니다.

use std::collections::BTreeSet;
use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::errors::AppError;

pub const AUTHENTICATION_REQUIRED_MESSAGE: &str =
    "Authentication is required to access this resource.";

/// JWT 토큰에서 추출된 인증 주체
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUser {
    /// 토큰 subject (사용자 이메일)
    pub subject: String,

    /// 권한 목록 (예: "USER", "ROLE_OIDC_USER")
    pub authorities: BTreeSet<String>,
}

impl AuthenticatedUser {
    pub fn new(subject: impl Into<String>, authorities: BTreeSet<String>) -> Self {
        Self {
            subject: subject.into(),
            authorities,
        }
    }

    pub fn email(&self) -> &str {
        &self.subject
    }

    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                AUTHENTICATION_REQUIRED_MESSAGE.to_string(),
            )
            .into())),
        }
    }
}
