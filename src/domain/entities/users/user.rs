//! User Entity Implementation
//!
//! 로컬 인증과 OAuth 인증을 모두 지원하는 통합 사용자 모델입니다.
//! MongoDB `users` 컬렉션의 문서와 1:1로 매핑됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use super::role::Role;

/// 사용자 엔티티
///
/// 로컬 계정은 `password_hash`를, OAuth 계정은 `oauth_provider`와
/// `oauth_id`를 가집니다. 두 방식이 동시에 채워지는 일은 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 사용자 이메일 (unique)
    pub email: String,
    pub username: String,
    /// 해시된 비밀번호 (OAuth 전용 계정은 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// OAuth 프로바이더 등록 이름 (예: "google")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_provider: Option<String>,
    /// 프로바이더가 발급한 사용자 식별자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: email.into(),
            username: username.into(),
            password_hash: Some(password_hash.into()),
            role: Role::User,
            profile_image_url: None,
            oauth_provider: None,
            oauth_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// 비밀번호 없이 프로바이더 정보만으로 생성됩니다.
    pub fn new_oauth(
        email: impl Into<String>,
        username: impl Into<String>,
        provider: impl Into<String>,
        oauth_id: impl Into<String>,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: email.into(),
            username: username.into(),
            password_hash: None,
            role: Role::User,
            profile_image_url,
            oauth_provider: Some(provider.into()),
            oauth_id: Some(oauth_id.into()),
            created_at: now,
            updated_at: now,
        }
    }

    /// 기존 계정을 OAuth 계정으로 연결하고 프로필을 갱신합니다.
    ///
    /// 연결된 계정은 더 이상 비밀번호로 로그인할 수 없습니다.
    pub fn link_oauth(
        &mut self,
        provider: impl Into<String>,
        oauth_id: impl Into<String>,
        username: Option<String>,
        profile_image_url: Option<String>,
    ) {
        if let Some(username) = username {
            self.username = username;
        }
        if profile_image_url.is_some() {
            self.profile_image_url = profile_image_url;
        }
        self.oauth_provider = Some(provider.into());
        self.oauth_id = Some(oauth_id.into());
        self.password_hash = None;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }

    pub fn is_oauth_account(&self, provider: &str, oauth_id: &str) -> bool {
        self.oauth_provider.as_deref() == Some(provider) && self.oauth_id.as_deref() == Some(oauth_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user() {
        let user = User::new_local("user@example.com", "tester", "$2b$04$hash");

        assert_eq!(user.id, None);
        assert_eq!(user.role, Role::User);
        assert!(user.password_hash.is_some());
        assert!(user.oauth_provider.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_new_oauth_user() {
        let user = User::new_oauth("user@gmail.com", "Google User", "google", "g-123", None);

        assert!(user.password_hash.is_none());
        assert!(user.is_oauth_account("google", "g-123"));
        assert!(!user.is_oauth_account("google", "g-999"));
    }

    #[test]
    fn test_link_oauth_clears_password() {
        let mut user = User::new_local("user@example.com", "tester", "$2b$04$hash");
        user.link_oauth(
            "google",
            "g-123",
            Some("Renamed".to_string()),
            Some("https://example.com/a.png".to_string()),
        );

        assert!(user.password_hash.is_none());
        assert_eq!(user.username, "Renamed");
        assert_eq!(user.profile_image_url.as_deref(), Some("https://example.com/a.png"));
        assert!(user.is_oauth_account("google", "g-123"));
    }

    #[test]
    fn test_link_oauth_keeps_existing_profile_when_absent() {
        let mut user = User::new_oauth(
            "user@gmail.com",
            "Google User",
            "google",
            "g-123",
            Some("https://example.com/old.png".to_string()),
        );
        user.link_oauth("google", "g-123", None, None);

        assert_eq!(user.username, "Google User");
        assert_eq!(user.profile_image_url.as_deref(), Some("https://example.com/old.png"));
    }

    #[test]
    fn test_password_hash_omitted_from_document_when_absent() {
        let user = User::new_oauth("user@gmail.com", "Google User", "google", "g-123", None);
        let doc = mongodb::bson::to_document(&user).unwrap();

        assert!(!doc.contains_key("password_hash"));
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("role").unwrap(), "USER");
    }
}
