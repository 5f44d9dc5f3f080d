//! 사용자 역할

use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 저장소와 JSON에서는 `"GUEST"`, `"USER"`, `"ADMIN"` 키로 직렬화되며,
/// 로그인 시 발급되는 토큰의 권한(authority) 값도 이 키를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Guest,
    User,
    Admin,
}

impl Role {
    pub fn key(&self) -> &'static str {
        match self {
            Role::Guest => "GUEST",
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Guest => "Role_Guest",
            Role::User => "Role_User",
            Role::Admin => "Role_Admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_keys_and_titles() {
        assert_eq!(Role::Guest.key(), "GUEST");
        assert_eq!(Role::User.key(), "USER");
        assert_eq!(Role::Admin.key(), "ADMIN");
        assert_eq!(Role::Admin.title(), "Role_Admin");
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_serializes_as_key() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");

        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(role.to_string(), "ADMIN");
    }
}
