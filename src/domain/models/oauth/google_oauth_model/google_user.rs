//! # Google OAuth 사용자 정보 모델
//!
//! Google UserInfo 엔드포인트(`https://www.googleapis.com/oauth2/v2/userinfo`)가
//! 반환하는 사용자 정보를 역직렬화하기 위한 모델입니다.

use serde::Deserialize;

/// Google OAuth 2.0 사용자 정보
///
/// | 필드 | 필수 스코프 |
/// |------|-------------|
/// | `id`, `email` | `openid`, `email` |
/// | `name`, `picture` | `profile` |
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 식별자 (변경되지 않음)
    pub id: String,

    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    /// 프로필 사진 URL
    #[serde(default)]
    pub picture: Option<String>,

    /// v2 UserInfo는 `verified_email`, OIDC UserInfo는 `email_verified`
    #[serde(default, alias = "email_verified")]
    pub verified_email: bool,
}

impl GoogleUserInfo {
    /// 계정 생성 시 사용할 사용자 이름
    ///
    /// `name`이 비어 있으면 이메일의 로컬 파트를 사용합니다.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                self.email
                    .split('@')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_userinfo() {
        let json = r#"{
            "id": "109876543210",
            "email": "user@gmail.com",
            "verified_email": true,
            "name": "Hong Gildong",
            "given_name": "Gildong",
            "family_name": "Hong",
            "picture": "https://lh3.googleusercontent.com/a/photo"
        }"#;

        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, "109876543210");
        assert!(info.verified_email);
        assert_eq!(info.display_name(), "Hong Gildong");
        assert!(info.picture.is_some());
    }

    #[test]
    fn test_deserialize_oidc_email_verified() {
        let info: GoogleUserInfo = serde_json::from_str(
            r#"{"id": "1", "email": "someone@gmail.com", "email_verified": true}"#,
        )
        .unwrap();

        assert!(info.verified_email);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let info: GoogleUserInfo =
            serde_json::from_str(r#"{"id": "1", "email": "someone@gmail.com"}"#).unwrap();

        assert_eq!(info.display_name(), "someone");
        assert!(!info.verified_email);
    }
}
