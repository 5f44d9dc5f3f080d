//! JWT 클레임 구조체
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)과 권한 목록(`auth`),
//! 토큰 용도(`typ`)를 담습니다.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// API 접근용 단기 토큰
    #[default]
    Access,
    /// 액세스 토큰 재발급용 장기 토큰
    Refresh,
}

/// JWT 토큰의 클레임(Payload)
///
/// - `sub`: 토큰의 주체 (사용자 이메일)
/// - `auth`: 쉼표로 연결된 권한 목록
/// - `typ`: 토큰 용도 (`access` / `refresh`)
/// - `iat`, `exp`: 발급/만료 시각 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub auth: String,
    #[serde(default)]
    pub typ: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// `auth` 클레임을 권한 집합으로 분리합니다. 빈 항목은 버립니다.
    pub fn authorities(&self) -> BTreeSet<String> {
        self.auth
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_access(&self) -> bool {
        self.typ == TokenKind::Access
    }

    pub fn is_refresh(&self) -> bool {
        self.typ == TokenKind::Refresh
    }
}

/// 권한 목록을 `auth` 클레임 형식으로 연결합니다.
pub fn join_authorities<I, S>(authorities: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    authorities
        .into_iter()
        .map(|a| a.as_ref().trim().to_string())
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
