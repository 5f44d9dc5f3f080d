use serde::{Deserialize, Serialize};

/// JWT 토큰 응답
///
/// OAuth 2.0 토큰 응답 형식을 따르며, 리프레시 토큰은 발급된 경우에만
/// 포함됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtResponse {
    /// 항상 "Bearer"
    pub grant_type: String,
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i64,
}

impl JwtResponse {
    pub fn bearer(access_token: String, refresh_token: Option<String>, expires_in: i64) -> Self {
        Self {
            grant_type: "Bearer".to_string(),
            access_token,
            refresh_token,
            expires_in,
        }
    }
}
